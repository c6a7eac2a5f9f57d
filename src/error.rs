use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("column settings config names `{column}` as a timestamp column, but table `{table}` has no column with that name")]
    MisconfiguredTimestampColumn { table: String, column: String },
}
