use roadpricing_core::model::LinkId;

#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("link '{0}' appears more than once in the network")]
    DuplicateLink(LinkId),
    #[error("link '{0}' has invalid free speed {1}")]
    InvalidFreespeed(LinkId, f64),
    #[error("failure opening network file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("failure reading network file {0}: {1}")]
    CsvReadError(String, csv::Error),
    #[error("failure writing network file {0}: {1}")]
    CsvWriteError(String, csv::Error),
}
