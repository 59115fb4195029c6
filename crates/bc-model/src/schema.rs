//! Basin schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Basin {
    #[serde(alias = "basinName")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_basin_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_drainage_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributing_drainage_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_stream: Option<Stream>,
}

impl Basin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_primary_stream(mut self, stream: Stream) -> Self {
        self.primary_stream = Some(stream);
        self
    }

    /// Every stream of the basin, root first, tributaries depth-first.
    pub fn streams(&self) -> Vec<&Stream> {
        let mut out = Vec::new();
        if let Some(root) = &self.primary_stream {
            root.collect_streams(&mut out);
        }
        out
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    #[serde(alias = "streamName")]
    pub name: String,
    #[serde(default)]
    pub starts_downstream: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_id: Option<String>,

    /// Stream this one flows into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiving_stream_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confluence_station: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confluence_bank: Option<String>,

    /// Stream this one flows out of.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diverting_stream_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diversion_station: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diversion_bank: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_slope: Option<f64>,

    #[serde(default, alias = "streamLocations")]
    pub locations: Vec<StreamLocation>,
    #[serde(default, alias = "streamReaches")]
    pub reaches: Vec<StreamReach>,
    #[serde(default)]
    pub tributaries: Vec<Stream>,
}

impl Stream {
    pub fn new(name: impl Into<String>, starts_downstream: bool) -> Self {
        Self {
            name: name.into(),
            starts_downstream,
            ..Self::default()
        }
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.stream_length = Some(length);
        self
    }

    pub fn with_location(mut self, location: StreamLocation) -> Self {
        self.locations.push(location);
        self
    }

    pub fn with_reach(mut self, reach: StreamReach) -> Self {
        self.reaches.push(reach);
        self
    }

    pub fn with_tributary(mut self, tributary: Stream) -> Self {
        self.tributaries.push(tributary);
        self
    }

    /// Attach this stream to the stream it flows into.
    pub fn joins(
        mut self,
        receiving: impl Into<String>,
        station: f64,
        bank: impl Into<String>,
    ) -> Self {
        self.receiving_stream_id = Some(receiving.into());
        self.confluence_station = Some(station);
        self.confluence_bank = Some(bank.into());
        self
    }

    /// Attach this stream to the stream it takes its flow from.
    pub fn diverts_from(
        mut self,
        diverting: impl Into<String>,
        station: f64,
        bank: impl Into<String>,
    ) -> Self {
        self.diverting_stream_id = Some(diverting.into());
        self.diversion_station = Some(station);
        self.diversion_bank = Some(bank.into());
        self
    }

    fn collect_streams<'a>(&'a self, out: &mut Vec<&'a Stream>) {
        out.push(self);
        for tributary in &self.tributaries {
            tributary.collect_streams(out);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreamLocation {
    #[serde(alias = "locationId")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_station: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_station: Option<f64>,
}

impl StreamLocation {
    pub fn new(name: impl Into<String>, station: f64) -> Self {
        Self {
            name: name.into(),
            station: Some(station),
            ..Self::default()
        }
    }

    pub fn on_bank(mut self, bank: impl Into<String>) -> Self {
        self.bank = Some(bank.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreamReach {
    #[serde(alias = "reachId")]
    pub name: String,
    #[serde(default, alias = "streamId", skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    #[serde(alias = "upstreamLocationId")]
    pub upstream_location_name: String,
    #[serde(alias = "downstreamLocationId")]
    pub downstream_location_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl StreamReach {
    pub fn new(
        name: impl Into<String>,
        upstream: impl Into<String>,
        downstream: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            upstream_location_name: upstream.into(),
            downstream_location_name: downstream.into(),
            ..Self::default()
        }
    }
}
