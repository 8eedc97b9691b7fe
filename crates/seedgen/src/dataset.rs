//! Assembles one organization's worth of records from the core samplers.
//!
//! Mirrors how the service lays data out: an organization owns users,
//! each user owns a folder tree of items, and sharing links hang off
//! individual items. Item ownership and link placement both come from
//! Dirichlet allocations; tree shapes come from biased Poisson rates.

use crate::namegen;
use crate::records::{
    Item, ItemKind, Organization, Permission, Record, Role, SharingLink, User,
};
use cabinet_synth::{
    allocate_by_dirichlet, build_poisson_tree, sample_rates_by_node_count, RateBias, SynthError,
};
use rand::Rng;
use std::collections::BTreeMap;
use uuid::Builder;

/// Concentration for splitting items across users. Below 1, so a few
/// users own most of the data while many own almost nothing.
pub const ITEM_ALPHA: f64 = 0.7;

/// Concentration for splitting sharing links across items. Much sparser
/// than item ownership: most items are never shared, a handful are hot.
pub const SHARING_LINK_ALPHA: f64 = 0.3;

/// Largest generated file size (1 GiB), inclusive.
const MAX_FILE_SIZE: u64 = 1 << 30;

/// Upper bound for sharing-link expiry: 2099-01-01 UTC, unix seconds.
const EXPIRY_HORIZON: u64 = 4_070_908_800;

/// What to generate.
#[derive(Debug, Clone)]
pub struct SeedPlan {
    pub org_name: String,
    pub users: u64,
    pub items: u64,
    pub sharing_links: u64,
}

/// A fully generated organization, ready to serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub organization: Organization,
    pub users: Vec<User>,
    pub items: Vec<Item>,
    pub sharing_links: Vec<SharingLink>,
}

impl Dataset {
    /// All records in load order: organization, then users, items, links,
    /// so every foreign key references an earlier line.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        std::iter::once(Record::Organization(&self.organization))
            .chain(self.users.iter().map(Record::User))
            .chain(self.items.iter().map(Record::Item))
            .chain(self.sharing_links.iter().map(Record::SharingLink))
    }

    /// Total number of records, the organization line included.
    pub fn record_count(&self) -> usize {
        1 + self.users.len() + self.items.len() + self.sharing_links.len()
    }
}

/// Generate a complete dataset for one organization.
///
/// All randomness comes from `rng`; a seeded generator reproduces the
/// dataset exactly. Fails fast (before emitting anything) when the plan
/// is unsatisfiable, e.g. items requested with zero users.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, plan: &SeedPlan) -> Result<Dataset, SynthError> {
    let organization = Organization {
        id: 1,
        name: plan.org_name.clone(),
    };

    let mut users = Vec::with_capacity(plan.users as usize);
    for i in 0..plan.users {
        let username = format!("{i}-{}", namegen::username(rng));
        let email = format!("{i}-{}", namegen::email(rng));
        users.push(User {
            id: i + 1,
            organization_id: organization.id,
            username,
            email,
            active: rng.gen_bool(0.8),
            role: if rng.gen_bool(0.5) {
                Role::Regular
            } else {
                Role::Admin
            },
            first_name: namegen::first_name(rng).to_string(),
            last_name: namegen::last_name(rng).to_string(),
        });
    }

    let items_per_user =
        allocate_by_dirichlet(rng, plan.users as usize, plan.items, ITEM_ALPHA)?;
    let tree_rates = sample_rates_by_node_count(rng, &items_per_user, &RateBias::default())?;

    let mut items = Vec::with_capacity(plan.items as usize);
    let mut next_item_id: u64 = 1;
    for ((user, &count), &rate) in users.iter().zip(&items_per_user).zip(&tree_rates) {
        let tree = build_poisson_tree(rng, count, rate)?;
        let parents = tree.parent_map();

        // Ascending-ID iteration visits parents before children, so the
        // parent's item ID is always already mapped.
        let mut node_to_item: BTreeMap<u64, u64> = BTreeMap::new();
        for (node, children) in tree.iter() {
            let parent_id = parents.get(&node).map(|p| node_to_item[p]);
            let is_file = children.is_empty();
            let item = Item {
                id: next_item_id,
                owner_id: user.id,
                parent_id,
                name: if is_file {
                    format!("{node}-{}", namegen::file_name(rng))
                } else {
                    format!("{node}-{}", namegen::slug(rng))
                },
                kind: if is_file { ItemKind::File } else { ItemKind::Folder },
                file_size: if is_file {
                    rng.gen_range(0..=MAX_FILE_SIZE)
                } else {
                    0
                },
            };
            node_to_item.insert(node, item.id);
            next_item_id += 1;
            items.push(item);
        }
        tracing::debug!(user = user.id, items = count, "user tree generated");
    }

    let links_per_item =
        allocate_by_dirichlet(rng, items.len(), plan.sharing_links, SHARING_LINK_ALPHA)?;

    let mut sharing_links = Vec::with_capacity(plan.sharing_links as usize);
    let mut next_link_id: u64 = 1;
    for (item, &count) in items.iter().zip(&links_per_item) {
        for _ in 0..count {
            let token = Builder::from_random_bytes(rng.gen()).into_uuid();
            let permission = if rng.gen_bool(0.5) {
                Permission::Read
            } else {
                Permission::Write
            };
            let expires_at = if rng.gen_bool(0.5) {
                Some(rng.gen_range(0..EXPIRY_HORIZON))
            } else {
                None
            };
            sharing_links.push(SharingLink {
                id: next_link_id,
                item_id: item.id,
                token,
                permission,
                expires_at,
            });
            next_link_id += 1;
        }
    }

    Ok(Dataset {
        organization,
        users,
        items,
        sharing_links,
    })
}
