// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod display;
pub mod filter;
pub mod ids;
pub mod model;
pub mod route;
pub mod state;
pub mod store;

pub use display::*;
pub use filter::*;
pub use ids::*;
pub use model::*;
pub use route::*;
pub use state::*;
pub use store::*;
