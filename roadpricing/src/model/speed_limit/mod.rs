mod speed_limit_policy;

pub use speed_limit_policy::SpeedLimitPolicy;
