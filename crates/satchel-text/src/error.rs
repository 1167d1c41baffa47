#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot capitalize an empty string")]
    Empty,
}

pub type Result<T> = std::result::Result<T, Error>;
