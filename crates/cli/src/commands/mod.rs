pub(crate) mod board;
pub(crate) mod db;
pub(crate) mod serve;
