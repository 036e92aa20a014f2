use geo::{Contains, Coord, Geometry, MultiPolygon, Point};
use std::path::Path;
use wkt::TryFromWkt;

#[derive(thiserror::Error, Debug)]
pub enum GeoUtilsError {
    #[error("unable to read file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("unable to read WKT in {0}: {1}")]
    InvalidWkt(String, String),
    #[error("area geometry must be a POLYGON or MULTIPOLYGON, found {0}")]
    InvalidAreaGeometry(String),
}

/// reads a WKT geometry from a file, such as a toll area or speed limit area.
pub fn read_area_wkt(filepath: &Path) -> Result<MultiPolygon<f64>, GeoUtilsError> {
    let name = filepath.to_string_lossy().to_string();
    let wkt_str =
        std::fs::read_to_string(filepath).map_err(|e| GeoUtilsError::ReadError(name.clone(), e))?;
    let geometry: Geometry<f64> = Geometry::try_from_wkt_str(&wkt_str)
        .map_err(|e| GeoUtilsError::InvalidWkt(name, e.to_string()))?;
    as_area(geometry)
}

/// normalizes an areal geometry into a multipolygon. any other geometry type
/// cannot enclose link coordinates and is rejected.
pub fn as_area(geometry: Geometry<f64>) -> Result<MultiPolygon<f64>, GeoUtilsError> {
    match geometry {
        Geometry::Polygon(p) => Ok(MultiPolygon::new(vec![p])),
        Geometry::MultiPolygon(mp) => Ok(mp),
        Geometry::Rect(r) => Ok(MultiPolygon::new(vec![r.to_polygon()])),
        other => Err(GeoUtilsError::InvalidAreaGeometry(
            geometry_type_name(&other).to_string(),
        )),
    }
}

/// the representative point of a link: the midpoint between its endpoints.
pub fn link_midpoint(from: &Coord<f64>, to: &Coord<f64>) -> Point<f64> {
    Point::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0)
}

/// tests whether a point lies in the interior of an area. points on the
/// boundary are not contained.
pub fn area_contains(area: &MultiPolygon<f64>, point: &Point<f64>) -> bool {
    area.0.iter().any(|polygon| polygon.contains(point))
}

fn geometry_type_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "POINT",
        Geometry::Line(_) => "LINE",
        Geometry::LineString(_) => "LINESTRING",
        Geometry::Polygon(_) => "POLYGON",
        Geometry::MultiPoint(_) => "MULTIPOINT",
        Geometry::MultiLineString(_) => "MULTILINESTRING",
        Geometry::MultiPolygon(_) => "MULTIPOLYGON",
        Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        Geometry::Rect(_) => "RECT",
        Geometry::Triangle(_) => "TRIANGLE",
    }
}
