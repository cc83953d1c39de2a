use crate::error::TackyError;

pub type TackyResult<T> = Result<T, TackyError>;
