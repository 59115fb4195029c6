//! Basin graph construction.
//!
//! Built in two passes. The plan pass walks the stream tree and settles
//! every stream's node list: locations, terminal points, junctions with
//! tributaries and diversion points. The freeze pass interns those nodes,
//! synthesizes the stream edges, stitches the reaches and hands back an
//! immutable [`Graph`].

use bc_core::{Name, Station};
use bc_model::{Basin, Stream};

use crate::builder::GraphBuilder;
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::node::{Bank, Node, NodeKind};
use crate::order::NodeOrder;
use crate::reach::stitch_reach;
use crate::synth::StreamChain;

/// Build the connectivity graph of one basin.
///
/// A basin without a primary stream gives an empty graph.
pub fn build_basin_graph(basin: &Basin) -> GraphResult<Graph> {
    let Some(root) = basin.primary_stream.as_ref() else {
        tracing::debug!(basin = %basin.name, "basin has no primary stream");
        return Ok(Graph::empty());
    };

    let plan = StreamPlan::collect(root, true)?;
    let graph = freeze(&plan)?;

    tracing::debug!(
        basin = %basin.name,
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        "built basin graph"
    );
    Ok(graph)
}

/// One stream's settled node list and attachment points.
struct StreamPlan<'a> {
    stream: &'a Stream,
    name: Name,
    order: NodeOrder,
    /// Own nodes, kept in `order`.
    nodes: Vec<Node>,
    /// Synthetic node placed at the stream's first station, if any.
    upstream_terminal: Option<Node>,
    /// Node on the receiving stream this stream flows into.
    confluence: Option<Node>,
    /// Node on the stream this stream takes its flow from.
    diversion: Option<Node>,
    tributaries: Vec<StreamPlan<'a>>,
}

impl<'a> StreamPlan<'a> {
    fn collect(stream: &'a Stream, primary: bool) -> GraphResult<Self> {
        let name = Name::new(&stream.name);

        let mut nodes = Vec::with_capacity(stream.locations.len() + 2);
        for location in &stream.locations {
            let station = location.station.ok_or_else(|| GraphError::MissingStation {
                location: location.name.clone(),
                stream: stream.name.clone(),
            })?;
            nodes.push(Node::location(
                location.name.as_str(),
                name.clone(),
                Station::new(station)?,
                Bank::parse(location.bank.as_deref()),
            ));
        }

        let tributaries = stream
            .tributaries
            .iter()
            .map(|tributary| Self::collect(tributary, false))
            .collect::<GraphResult<Vec<_>>>()?;

        let mut plan = Self {
            stream,
            name,
            order: NodeOrder::new(stream.starts_downstream),
            nodes,
            upstream_terminal: None,
            confluence: None,
            diversion: None,
            tributaries,
        };

        plan.add_terminal_nodes(primary)?;
        plan.add_junction_nodes()?;
        plan.order.sort(&mut plan.nodes);
        plan.check_duplicates()?;
        Ok(plan)
    }

    /// Synthetic nodes at the stream's ends where no location sits.
    ///
    /// Only the primary stream gets a downstream end; a tributary ends at its
    /// confluence node on the receiving stream.
    fn add_terminal_nodes(&mut self, primary: bool) -> GraphResult<()> {
        let Some(length) = self.stream.stream_length else {
            return Ok(());
        };
        let (first, last) = if self.stream.starts_downstream {
            (length, 0.0)
        } else {
            (0.0, length)
        };

        let first = Station::new(first)?;
        if self.position_at(first).is_none() {
            let node = Node::empty(&self.name, first, Bank::Left);
            self.upstream_terminal = Some(node.clone());
            self.nodes.push(node);
        }

        let last = Station::new(last)?;
        if primary && self.position_at(last).is_none() {
            self.nodes.push(Node::empty(&self.name, last, Bank::Left));
        }
        Ok(())
    }

    /// Confluence and diversion points for every tributary.
    fn add_junction_nodes(&mut self) -> GraphResult<()> {
        for i in 0..self.tributaries.len() {
            let tributary: &'a Stream = self.tributaries[i].stream;

            if let (Some(source_stream), Some(station)) = (
                tributary.diverting_stream_id.as_deref(),
                tributary.diversion_station,
            ) {
                let station = Station::new(station)?;
                let bank = Bank::parse(tributary.diversion_bank.as_deref());
                let skip = self.tributaries[i].name.clone();

                // Only streams below the receiving stream can feed a diversion.
                let found = find_plan_mut(&mut self.tributaries, source_stream, &skip)
                    .map(|source| source.attach(station, bank, NodeKind::Diversion));

                match found {
                    Some((node, created)) => {
                        let plan = &mut self.tributaries[i];
                        if created {
                            plan.drop_upstream_terminal();
                        }
                        plan.diversion = Some(node);
                    }
                    None => tracing::debug!(
                        stream = %tributary.name,
                        diverts_from = source_stream,
                        "diverting stream is not a tributary of the receiving stream"
                    ),
                }
            }

            match tributary.confluence_station {
                Some(station) => {
                    let station = Station::new(station)?;
                    let bank = Bank::parse(tributary.confluence_bank.as_deref());
                    let (node, _) = self.attach(station, bank, NodeKind::Confluence);
                    self.tributaries[i].confluence = Some(node);
                }
                None => tracing::warn!(
                    stream = %tributary.name,
                    receiving = %self.name,
                    "tributary has no confluence station and stays unconnected"
                ),
            }
        }
        Ok(())
    }

    /// The node at `station` on this stream, and whether it had to be created.
    ///
    /// An existing location there is tagged as the junction; otherwise a
    /// synthetic node is inserted on `bank`.
    fn attach(&mut self, station: Station, bank: Bank, kind: NodeKind) -> (Node, bool) {
        if let Some(pos) = self.position_at(station) {
            let tagged = self.nodes[pos].clone().tagged(kind);
            self.nodes[pos] = tagged.clone();
            return (tagged, false);
        }
        let node = Node::empty(&self.name, station, bank);
        self.order.insert(&mut self.nodes, node.clone());
        (node, true)
    }

    /// A stream fed through a newly created diversion node starts there, not
    /// at a synthetic end of its own. Real locations are never dropped.
    fn drop_upstream_terminal(&mut self) {
        if let Some(terminal) = self.upstream_terminal.take() {
            self.nodes.retain(|node| node != &terminal);
        }
    }

    fn position_at(&self, station: Station) -> Option<usize> {
        self.nodes.iter().position(|node| node.station() == station)
    }

    fn check_duplicates(&self) -> GraphResult<()> {
        // Sorted with id as tie-break, so equal nodes are adjacent.
        match self.nodes.windows(2).find(|pair| pair[0] == pair[1]) {
            Some(pair) => Err(GraphError::DuplicateNode {
                id: pair[0].id().to_string(),
                stream: self.name.to_string(),
                station: pair[0].station().to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Find a stream by name anywhere below `plans`, skipping `skip`.
fn find_plan_mut<'p, 'a>(
    plans: &'p mut [StreamPlan<'a>],
    name: &str,
    skip: &Name,
) -> Option<&'p mut StreamPlan<'a>> {
    for plan in plans.iter_mut() {
        if plan.name.matches(name) && &plan.name != skip {
            return Some(plan);
        }
        if let Some(found) = find_plan_mut(&mut plan.tributaries, name, skip) {
            return Some(found);
        }
    }
    None
}

fn freeze(root: &StreamPlan<'_>) -> GraphResult<Graph> {
    let mut builder = GraphBuilder::new();
    intern_nodes(root, &mut builder);

    let mut chains = Vec::new();
    collect_chains(root, &mut builder, &mut chains);

    for (_, chain) in &chains {
        builder.add_edges(chain.edges.iter().cloned());
    }

    for (stream, chain) in &chains {
        for reach in &stream.reaches {
            let edges = stitch_reach(reach, chain, builder.nodes())?;
            builder.add_edges(edges);
        }
    }

    builder.build()
}

fn intern_nodes(plan: &StreamPlan<'_>, builder: &mut GraphBuilder) {
    for node in &plan.nodes {
        builder.add_node(node.clone());
    }
    for tributary in &plan.tributaries {
        intern_nodes(tributary, builder);
    }
}

fn collect_chains<'a>(
    plan: &StreamPlan<'a>,
    builder: &mut GraphBuilder,
    chains: &mut Vec<(&'a Stream, StreamChain)>,
) {
    let nodes = plan
        .nodes
        .iter()
        .map(|node| builder.add_node(node.clone()))
        .collect();
    let diversion = plan.diversion.clone().map(|node| builder.add_node(node));
    let confluence = plan.confluence.clone().map(|node| builder.add_node(node));

    let chain = StreamChain::synthesize(
        plan.name.clone(),
        plan.stream.starts_downstream,
        nodes,
        diversion,
        confluence,
    );
    chains.push((plan.stream, chain));

    for tributary in &plan.tributaries {
        collect_chains(tributary, builder, chains);
    }
}
