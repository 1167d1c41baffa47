#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An entry may not embed the list separator; it would read back as
    /// several entries.
    #[error("entry '{entry}' contains the list separator")]
    SeparatorInEntry { entry: String },
}

pub type Result<T> = std::result::Result<T, Error>;
