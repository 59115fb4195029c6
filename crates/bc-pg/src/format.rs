//! Media types and the basin formatter.

use std::fmt;
use std::str::FromStr;

use bc_graph::{Graph, build_basin_graph};
use bc_model::Basin;
use rayon::prelude::*;

use crate::document::{NamedPgGraph, PgGraph};
use crate::encode::encode;
use crate::error::{FormatError, FormatResult};

/// The PG-JSON flavours a basin can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentType {
    #[default]
    PgJson,
    NamedPgJson,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::PgJson, ContentType::NamedPgJson];

    pub fn media_type(self) -> &'static str {
        match self {
            ContentType::PgJson => "application/vnd.pg+json",
            ContentType::NamedPgJson => "application/vnd.named+pg+json",
        }
    }

    pub fn alias(self) -> &'static str {
        match self {
            ContentType::PgJson => "pgjson",
            ContentType::NamedPgJson => "named-pgjson",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.media_type())
    }
}

impl FromStr for ContentType {
    type Err = FormatError;

    /// Accepts a media type (parameters after `;` are ignored) or its alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let essence = s.split(';').next().unwrap_or_default().trim();
        Self::ALL
            .into_iter()
            .find(|ct| {
                essence.eq_ignore_ascii_case(ct.media_type())
                    || essence.eq_ignore_ascii_case(ct.alias())
            })
            .ok_or_else(|| FormatError::UnsupportedFormat(s.to_string()))
    }
}

/// Writes basins as PG-JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgJsonFormatter {
    content_type: ContentType,
    pretty: bool,
}

impl PgJsonFormatter {
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Build one basin's graph and write it.
    pub fn format(&self, basin: &Basin) -> FormatResult<String> {
        let graph = build_basin_graph(basin)?;
        self.format_graph(&basin.name, &graph)
    }

    /// Write an already-built graph; `name` is used by the named flavour.
    pub fn format_graph(&self, name: &str, graph: &Graph) -> FormatResult<String> {
        let pg = encode(graph);
        match self.content_type {
            ContentType::PgJson => self.to_json(&pg),
            ContentType::NamedPgJson => self.to_json(&NamedPgGraph {
                name: name.to_string(),
                graph: pg,
            }),
        }
    }

    /// Write several basins.
    ///
    /// Plain PG-JSON concatenates the per-basin documents; the named
    /// flavour writes a single JSON array. Basins are built in parallel and
    /// the first failure is returned.
    pub fn format_all(&self, basins: &[Basin]) -> FormatResult<String> {
        let graphs = basins
            .par_iter()
            .map(|basin| -> FormatResult<(&str, PgGraph)> {
                Ok((basin.name.as_str(), encode(&build_basin_graph(basin)?)))
            })
            .collect::<FormatResult<Vec<_>>>()?;

        tracing::debug!(
            basins = graphs.len(),
            content_type = %self.content_type,
            "formatting basin list"
        );

        match self.content_type {
            ContentType::PgJson => graphs
                .iter()
                .map(|(_, pg)| self.to_json(pg))
                .collect::<FormatResult<Vec<_>>>()
                .map(|docs| docs.concat()),
            ContentType::NamedPgJson => {
                let named: Vec<NamedPgGraph> = graphs
                    .into_iter()
                    .map(|(name, graph)| NamedPgGraph {
                        name: name.to_string(),
                        graph,
                    })
                    .collect();
                self.to_json(&named)
            }
        }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> FormatResult<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}
