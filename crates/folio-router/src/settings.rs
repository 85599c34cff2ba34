//! Router configuration.
//!
//! Route tables are static configuration, so they can be declared in TOML and
//! turned into an immutable [`RouteTable`] at startup:
//!
//! ```toml
//! home = "home"
//! scroll_delay_ms = 100
//!
//! [[routes]]
//! id = "home"
//! slug = ""
//!
//! [[routes]]
//! id = "contact"
//! slug = "contact"
//! ```

use super::controller::ControllerOptions;
use super::error::{Result, RouterError};
use super::page::DEFAULT_BLOG_PREFIX;
use super::resolver::DEFAULT_PAGE_QUERY_PARAM;
use super::table::RouteTable;
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_home() -> String {
	"home".to_string()
}

fn default_page_query_param() -> String {
	DEFAULT_PAGE_QUERY_PARAM.to_string()
}

fn default_scroll_delay_ms() -> u64 {
	100
}

fn default_blog_prefix() -> String {
	DEFAULT_BLOG_PREFIX.to_string()
}

/// One `[[routes]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSetting {
	/// Page id.
	pub id: String,
	/// URL slug; empty for the home page.
	#[serde(default)]
	pub slug: String,
}

/// Router settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterSettings {
	/// Id of the home page.
	#[serde(default = "default_home")]
	pub home: String,
	/// Query parameter consulted on startup.
	#[serde(default = "default_page_query_param")]
	pub page_query_param: String,
	/// Delay of the deferred scroll correction, in milliseconds.
	#[serde(default = "default_scroll_delay_ms")]
	pub scroll_delay_ms: u64,
	/// Prefix encoding blog posts in page ids.
	#[serde(default = "default_blog_prefix")]
	pub blog_prefix: String,
	/// Routes in declaration order.
	#[serde(default)]
	pub routes: Vec<RouteSetting>,
}

impl Default for RouterSettings {
	fn default() -> Self {
		Self {
			home: default_home(),
			page_query_param: default_page_query_param(),
			scroll_delay_ms: default_scroll_delay_ms(),
			blog_prefix: default_blog_prefix(),
			routes: Vec::new(),
		}
	}
}

impl RouterSettings {
	/// Parses settings from TOML.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		toml::from_str(source).map_err(|e| {
			tracing::warn!(error = %e, "rejected router settings");
			RouterError::InvalidSettings(e.to_string())
		})
	}

	/// Appends a route.
	pub fn with_route(mut self, id: impl Into<String>, slug: impl Into<String>) -> Self {
		self.routes.push(RouteSetting {
			id: id.into(),
			slug: slug.into(),
		});
		self
	}

	/// Builds the route table described by these settings.
	///
	/// An empty `blog_prefix` is rejected: every unregistered id would decode
	/// as a blog post.
	pub fn route_table(&self) -> Result<RouteTable> {
		if self.blog_prefix.is_empty() {
			tracing::warn!("rejected router settings with an empty blog prefix");
			return Err(RouterError::InvalidSettings(
				"blog_prefix must not be empty".to_string(),
			));
		}
		self.routes
			.iter()
			.fold(
				RouteTable::builder(self.home.as_str()).blog_prefix(self.blog_prefix.as_str()),
				|builder, route| builder.route(route.id.as_str(), route.slug.as_str()),
			)
			.build()
	}

	/// Returns the controller options described by these settings.
	pub fn controller_options(&self) -> ControllerOptions {
		ControllerOptions {
			page_query_param: self.page_query_param.clone(),
			scroll_delay: Duration::from_millis(self.scroll_delay_ms),
		}
	}
}
