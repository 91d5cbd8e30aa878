//! Synthetic dataset generation.
//!
//! The generator is written against [`rand::Rng`] so callers choose the
//! randomness: the component seeds from entropy, tests inject a seeded
//! `SmallRng` and assert structure (counts, invariants) rather than exact
//! values. Two entropy-seeded calls are expected to differ.

use rand::{Rng, RngCore};

use super::types::{GraphData, LinkWeight, NodeDetails, NodeStatus, TrustLink, TrustNode};

/// A curated entity, always generated as [`NodeStatus::Trusted`].
#[derive(Clone, Copy, Debug)]
pub struct RosterMember {
	/// Stable node id.
	pub id: &'static str,
	/// Display name.
	pub name: &'static str,
	/// Role shown in the hover overlay.
	pub role: &'static str,
}

/// The default curated roster.
pub const DEFAULT_ROSTER: &[RosterMember] = &[
	RosterMember { id: "naresh", name: "Naresh", role: "UI/UX" },
	RosterMember { id: "sreejith", name: "Sreejith", role: "AI Models" },
	RosterMember { id: "rohan", name: "Rohan", role: "Blockchain Dev" },
	RosterMember { id: "guru", name: "Guru", role: "Full Stack" },
	RosterMember { id: "sarupa", name: "Sarupa", role: "Research & Data" },
	RosterMember { id: "shreya", name: "Shreya", role: "Behavioral Analysis" },
	RosterMember { id: "bhuvan", name: "Bhuvan", role: "Graph Engine" },
	RosterMember { id: "rakshita", name: "Rakshita", role: "Frontend & Animations" },
];

/// Shape of the generated dataset.
#[derive(Clone, Debug)]
pub struct DatasetConfig {
	/// Curated members, linked pairwise with [`Self::roster_link_probability`].
	pub roster: Vec<RosterMember>,
	/// Additional synthetic trusted nodes.
	pub extra_trusted: usize,
	/// Flagged nodes.
	pub flagged: usize,
	/// Watchlist nodes.
	pub watchlist: usize,
	/// Chance that any given roster pair gets a reinforced link.
	pub roster_link_probability: f64,
}

impl Default for DatasetConfig {
	fn default() -> Self {
		DatasetConfig {
			roster: DEFAULT_ROSTER.to_vec(),
			extra_trusted: 7,
			flagged: 3,
			watchlist: 5,
			roster_link_probability: 0.7,
		}
	}
}

/// Build a dataset: roster first, then extra trusted, flagged and watchlist
/// nodes, then 1..=3 random out-links per node plus probabilistic reinforced
/// links between roster pairs.
pub fn generate(config: &DatasetConfig, rng: &mut impl Rng) -> GraphData {
	let total = config.roster.len() + config.extra_trusted + config.flagged + config.watchlist;
	let mut nodes: Vec<TrustNode> = Vec::with_capacity(total);

	for member in &config.roster {
		nodes.push(TrustNode {
			id: member.id.to_string(),
			name: member.name.to_string(),
			status: NodeStatus::Trusted,
			details: placeholder_details(rng, Some(member.role.to_string())),
		});
	}
	for i in 1..=config.extra_trusted {
		nodes.push(TrustNode {
			id: format!("user{i}"),
			name: format!("User {i}"),
			status: NodeStatus::Trusted,
			details: placeholder_details(rng, None),
		});
	}
	for i in 1..=config.flagged {
		nodes.push(TrustNode {
			id: format!("fraud{i}"),
			name: format!("Fraudster {i}"),
			status: NodeStatus::Flagged,
			details: placeholder_details(rng, None),
		});
	}
	for i in 1..=config.watchlist {
		nodes.push(TrustNode {
			id: format!("watch{i}"),
			name: format!("Watchlist {i}"),
			status: NodeStatus::Watchlist,
			details: placeholder_details(rng, None),
		});
	}

	let mut links: Vec<TrustLink> = Vec::new();

	// Random out-degree process, not a designed topology. Duplicate pairs
	// are fine; self-loops are avoided by redrawing the target, which always
	// terminates once there are at least two nodes.
	if nodes.len() > 1 {
		for i in 0..nodes.len() {
			let out_degree = rng.gen_range(1..=3);
			for _ in 0..out_degree {
				let target = loop {
					let candidate = rng.gen_range(0..nodes.len());
					if candidate != i {
						break candidate;
					}
				};
				links.push(TrustLink {
					source: nodes[i].id.clone(),
					target: nodes[target].id.clone(),
					weight: LinkWeight::Ordinary,
				});
			}
		}
	}

	// Cluster the roster visually with thicker pairwise links.
	for i in 0..config.roster.len() {
		for j in (i + 1)..config.roster.len() {
			if rng.gen_bool(config.roster_link_probability) {
				links.push(TrustLink {
					source: config.roster[i].id.to_string(),
					target: config.roster[j].id.to_string(),
					weight: LinkWeight::Reinforced,
				});
			}
		}
	}

	debug_assert!(
		links_resolve(&nodes, &links),
		"generated a dangling or self-loop link"
	);

	GraphData { nodes, links }
}

fn placeholder_details(rng: &mut impl Rng, role: Option<String>) -> NodeDetails {
	NodeDetails {
		ip: format!("192.168.{}.{}", rng.gen_range(0..255u16), rng.gen_range(0..255u16)),
		aadhaar: format!("XXXX-XXXX-{}", rng.gen_range(1000..10000u16)),
		wallets: vec![short_wallet(rng), short_wallet(rng)],
		role,
	}
}

fn short_wallet(rng: &mut impl RngCore) -> String {
	format!("0x{:08x}", rng.next_u32())
}

fn links_resolve(nodes: &[TrustNode], links: &[TrustLink]) -> bool {
	links.iter().all(|link| {
		link.source != link.target
			&& nodes.iter().any(|n| n.id == link.source)
			&& nodes.iter().any(|n| n.id == link.target)
	})
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn seeded(seed: u64) -> SmallRng {
		SmallRng::seed_from_u64(seed)
	}

	#[test]
	fn links_always_resolve_and_never_self_loop() {
		for seed in 0..32 {
			let data = generate(&DatasetConfig::default(), &mut seeded(seed));
			let ids: HashSet<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
			for link in &data.links {
				assert!(ids.contains(link.source.as_str()), "dangling source (seed {seed})");
				assert!(ids.contains(link.target.as_str()), "dangling target (seed {seed})");
				assert_ne!(link.source, link.target, "self-loop (seed {seed})");
			}
		}
	}

	#[test]
	fn default_config_produces_expected_counts() {
		let data = generate(&DatasetConfig::default(), &mut seeded(7));
		assert_eq!(data.nodes.len(), 23);

		let trusted = data
			.nodes
			.iter()
			.filter(|n| n.status == NodeStatus::Trusted)
			.count();
		let flagged = data
			.nodes
			.iter()
			.filter(|n| n.status == NodeStatus::Flagged)
			.count();
		let watchlist = data
			.nodes
			.iter()
			.filter(|n| n.status == NodeStatus::Watchlist)
			.count();
		assert_eq!(trusted, 15);
		assert_eq!(flagged, 3);
		assert_eq!(watchlist, 5);

		// At least one random out-edge per node, at most three plus the
		// C(8,2) = 28 possible roster pairs.
		assert!(data.links.len() >= 23);
		assert!(data.links.len() <= 23 * 3 + 28);
	}

	#[test]
	fn node_ids_are_unique() {
		let data = generate(&DatasetConfig::default(), &mut seeded(11));
		let ids: HashSet<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), data.nodes.len());
	}

	#[test]
	fn roster_members_keep_curated_names_and_roles() {
		let data = generate(&DatasetConfig::default(), &mut seeded(3));
		let rohan = data.nodes.iter().find(|n| n.id == "rohan").unwrap();
		assert_eq!(rohan.name, "Rohan");
		assert_eq!(rohan.status, NodeStatus::Trusted);
		assert_eq!(rohan.details.role.as_deref(), Some("Blockchain Dev"));
		assert_eq!(rohan.details.wallets.len(), 2);
	}

	#[test]
	fn reinforced_links_only_join_roster_members() {
		let data = generate(&DatasetConfig::default(), &mut seeded(5));
		let roster: HashSet<&str> = DEFAULT_ROSTER.iter().map(|m| m.id).collect();
		for link in data.links.iter().filter(|l| l.weight == LinkWeight::Reinforced) {
			assert!(roster.contains(link.source.as_str()));
			assert!(roster.contains(link.target.as_str()));
		}
	}

	#[test]
	fn empty_roster_is_tolerated() {
		let config = DatasetConfig {
			roster: Vec::new(),
			extra_trusted: 4,
			flagged: 2,
			watchlist: 1,
			roster_link_probability: 0.7,
		};
		let data = generate(&config, &mut seeded(1));
		assert_eq!(data.nodes.len(), 7);
		assert!(data.links.len() >= 7);
		assert!(data.links.iter().all(|l| l.weight == LinkWeight::Ordinary));
	}

	#[test]
	fn singleton_dataset_has_no_links() {
		let config = DatasetConfig {
			roster: Vec::new(),
			extra_trusted: 1,
			flagged: 0,
			watchlist: 0,
			roster_link_probability: 0.7,
		};
		let data = generate(&config, &mut seeded(1));
		assert_eq!(data.nodes.len(), 1);
		assert!(data.links.is_empty());
	}

	#[test]
	fn empty_config_yields_empty_dataset() {
		let config = DatasetConfig {
			roster: Vec::new(),
			extra_trusted: 0,
			flagged: 0,
			watchlist: 0,
			roster_link_probability: 0.0,
		};
		let data = generate(&config, &mut seeded(1));
		assert!(data.nodes.is_empty());
		assert!(data.links.is_empty());
	}

	#[test]
	fn certain_probability_links_every_roster_pair() {
		let config = DatasetConfig {
			roster_link_probability: 1.0,
			..DatasetConfig::default()
		};
		let data = generate(&config, &mut seeded(9));
		let reinforced = data
			.links
			.iter()
			.filter(|l| l.weight == LinkWeight::Reinforced)
			.count();
		assert_eq!(reinforced, 28);
	}

	#[test]
	fn same_seed_same_structure_different_seed_usually_differs() {
		let a = generate(&DatasetConfig::default(), &mut seeded(42));
		let b = generate(&DatasetConfig::default(), &mut seeded(42));
		assert_eq!(a.links.len(), b.links.len());
		assert_eq!(a.nodes.len(), b.nodes.len());
		assert_eq!(a.nodes[0].details.ip, b.nodes[0].details.ip);
	}
}
