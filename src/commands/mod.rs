//! Menu commands
//!
//! The host menu is an explicit table of entries, each bound to a
//! [`MenuCommand`] variant. Front ends dispatch by matching on the variant.

use serde::Serialize;
use std::fmt::Write;

use crate::config::GeocoderConfig;
use crate::core::lookup::NOT_FOUND_MARKER;
use crate::{GIT_HASH, VERSION};

/// Product name shown in menus and the about screen
pub const PRODUCT_NAME: &str = "UK Postcode Geocoder";

/// Actions reachable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCommand {
    GeocodeSelection,
    About,
}

/// One entry of the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Command line name
    pub key: &'static str,
    /// Label shown in the menu
    pub label: &'static str,
    pub description: &'static str,
    pub command: MenuCommand,
}

/// Ordered menu entries
#[derive(Debug, Clone)]
pub struct CommandTable {
    items: Vec<MenuItem>,
}

impl CommandTable {
    /// The geocoder's menu: "Geocode selection" then "About"
    pub fn standard() -> Self {
        Self {
            items: vec![
                MenuItem {
                    key: "geocode",
                    label: "Geocode selection",
                    description: "Look up latitude and longitude for every postcode in the selection",
                    command: MenuCommand::GeocodeSelection,
                },
                MenuItem {
                    key: "about",
                    label: "About",
                    description: "Show information about the geocoder",
                    command: MenuCommand::About,
                },
            ],
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Menu entry for a command
    pub fn entry(&self, command: MenuCommand) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.command == command)
    }

    /// Menu listing, one entry per line
    pub fn render(&self) -> String {
        let width = self.items.iter().map(|i| i.key.len()).max().unwrap_or(0);
        let mut out = format!("{}\n", PRODUCT_NAME);
        for item in &self.items {
            let _ = writeln!(
                out,
                "  {:<width$}  {}: {}",
                item.key,
                item.label,
                item.description,
                width = width
            );
        }
        out
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text of the about screen
pub fn about_text(config: &GeocoderConfig) -> String {
    format!(
        "{name} v{version} ({hash})\n\
         Converts UK postcodes into latitude and longitude coordinates.\n\
         Data source: postcodes.io bulk lookup ({endpoint})\n\
         Postcodes per request: {size} (limit {limit}, sizing {sizing})\n\
         Postcodes without a match are marked \"{marker}\".\n",
        name = PRODUCT_NAME,
        version = VERSION,
        hash = GIT_HASH,
        endpoint = config.endpoint,
        size = config.effective_batch_size(),
        limit = config.batch_limit,
        sizing = config.batch_sizing,
        marker = NOT_FOUND_MARKER,
    )
}
