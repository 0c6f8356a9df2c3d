use log::{info, warn};
use petgraph::unionfind::UnionFind;
use petgraph::visit::{EdgeRef, NodeIndexable};

use super::config::CampusModelConfig;
use super::osm::create_campus_graph;
use super::pois::{default_campus_pois, pois_from_csv};
use crate::model::{CampusGraph, CampusModel};
use crate::Error;

/// Creates a campus model based on the provided configuration.
///
/// This is the initialization barrier of the engine: no search may run
/// before it completes, and a failure here aborts startup entirely (no
/// partial graph is ever exposed).
///
/// # Errors
///
/// Returns an error if there are problems reading or processing the map
/// extract or the POI table.
pub fn create_campus_model(config: &CampusModelConfig) -> Result<CampusModel, Error> {
    validate_config(config)?;

    info!(
        "Processing map extract (OSM): {}",
        config.osm_path.display()
    );
    let graph = create_campus_graph(&config.osm_path)?;
    info!(
        "Campus graph built: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let pois = match &config.poi_path {
        Some(path) => pois_from_csv(path)?,
        None => default_campus_pois(),
    };

    let model = CampusModel::new(graph, pois, config.max_snap_distance)?;
    validate_poi_connectivity(&model);

    info!("Campus model created successfully");
    // Extract decoding allocates large intermediate buffers that are not
    // always released back to the system. Release the free tail of the
    // heap now that the model is resident.
    //
    // # Safety
    //
    // This call is safe to use on linux with the glibc implementation,
    // which is checked by the cfg attribute at compile time.
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    unsafe {
        if libc::malloc_trim(0) == 0 {
            log::warn!("Memory trimming failed - continuing anyway");
        } else {
            log::debug!("Successfully trimmed unused heap memory");
        }
    }
    Ok(model)
}

fn validate_config(config: &CampusModelConfig) -> Result<(), Error> {
    if !config.osm_path.exists() {
        return Err(Error::InvalidData(format!(
            "OSM file not found: {}",
            config.osm_path.display()
        )));
    }

    if let Some(poi_path) = &config.poi_path
        && !poi_path.exists()
    {
        return Err(Error::InvalidData(format!(
            "POI table not found: {}",
            poi_path.display()
        )));
    }

    if config.max_snap_distance <= 0.0 {
        return Err(Error::InvalidData(
            "max_snap_distance must be positive".to_string(),
        ));
    }

    Ok(())
}

/// Warns when the snapped POI anchors span more than one connected
/// component: routes between those locations will legitimately come back
/// as "no route found".
fn validate_poi_connectivity(model: &CampusModel) {
    let labels = component_labels(&model.graph);

    let mut anchor_labels: Vec<usize> = model
        .locations()
        .iter()
        .filter_map(|name| model.resolve(name).ok())
        .map(|node| labels[node.index()])
        .collect();
    anchor_labels.sort_unstable();
    anchor_labels.dedup();

    if anchor_labels.len() > 1 {
        warn!(
            "Campus POIs span {} disconnected path-network components; \
             some location pairs will have no route. Consider a larger extract.",
            anchor_labels.len()
        );
    }
}

fn component_labels(graph: &CampusGraph) -> Vec<usize> {
    let mut vertex_sets = UnionFind::new(graph.graph.node_bound());
    for edge in graph.graph.edge_references() {
        vertex_sets.union(edge.source().index(), edge.target().index());
    }
    vertex_sets.into_labeling()
}
