pub use crate::{
    api::*,
    catalog::*,
    clap::*,
    import::*,
    index::*,
    likes::*,
};

pub use clap::{Parser, Subcommand};
pub use log::{info, warn, error, debug, trace};
pub use serde::{Serialize, Deserialize};
pub use seriefind_common::*;
pub use std::{
    collections::HashMap, sync::Arc, cmp::Ordering, net::SocketAddr, path::{Path, PathBuf},
};
pub use tokio::sync::RwLock;
pub use reqwest::Client;
