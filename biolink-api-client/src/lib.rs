mod client;
mod error;
mod util;

pub use self::{
    client::{
        Client,
        Snapshot,
    },
    error::Error,
};
