//! Query source implementations.

mod duckduckgo;
mod serpapi;

pub use duckduckgo::DuckDuckGo;
pub use serpapi::SerpApi;
