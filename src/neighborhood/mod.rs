//! Neighbourhood generators for DCKP local search.
//!
//! Three move structures of increasing strength, shared by hill
//! climbing and VND:
//!
//! - **Add/Drop**: insert one admissible outside item, or remove one
//!   selected item.
//! - **Swap(1-1)**: exchange one selected item for one outside item.
//! - **Swap(2-1)**: exchange two selected items for one outside item of
//!   strictly greater profit.
//!
//! Every generator materialises the full feasible neighbourhood.
//! Enumeration order is fixed (selected items ascending, outside items
//! ascending) so best-improvement tie-breaking is deterministic: when
//! several neighbours share the maximum profit, the first enumerated
//! wins.

use crate::problem::{Instance, Solution};

/// The VND neighbourhood structures, cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    AddDrop,
    Swap11,
    Swap21,
}

impl Neighborhood {
    /// Materialises this neighbourhood around `current`.
    pub fn generate(self, instance: &Instance, current: &Solution) -> Vec<Solution> {
        match self {
            Neighborhood::AddDrop => add_drop(instance, current),
            Neighborhood::Swap11 => swap_1_1(instance, current),
            Neighborhood::Swap21 => swap_2_1(instance, current),
        }
    }
}

fn outside_items(instance: &Instance, current: &Solution) -> Vec<usize> {
    (0..instance.n_items)
        .filter(|&item| !current.contains(item))
        .collect()
}

/// ADD moves for every admissible outside item, then DROP moves for
/// every selected item. Drops are always feasible.
pub fn add_drop(instance: &Instance, current: &Solution) -> Vec<Solution> {
    let mut neighborhood = Vec::with_capacity(instance.n_items);

    for item in outside_items(instance, current) {
        if current.total_weight + instance.weights[item] > instance.capacity {
            continue;
        }
        if current
            .items()
            .any(|selected| instance.has_conflict(item, selected))
        {
            continue;
        }
        let mut neighbor = current.clone();
        neighbor.add_item(item, instance.profits[item], instance.weights[item]);
        neighbor.is_feasible = true;
        neighborhood.push(neighbor);
    }

    let selected: Vec<usize> = current.items().collect();
    for item in selected {
        let mut neighbor = current.clone();
        neighbor.remove_item(item, instance.profits[item], instance.weights[item]);
        neighbor.is_feasible = true;
        neighborhood.push(neighbor);
    }

    neighborhood
}

/// Swap(1-1): remove `item_out`, add `item_in`, provided the exchanged
/// weight fits and `item_in` conflicts with nothing that remains.
pub fn swap_1_1(instance: &Instance, current: &Solution) -> Vec<Solution> {
    let selected: Vec<usize> = current.items().collect();
    let outside = outside_items(instance, current);

    let mut neighborhood = Vec::with_capacity(selected.len() * outside.len() / 4);

    for &item_out in &selected {
        let freed_weight = instance.weights[item_out];
        let freed_profit = instance.profits[item_out];

        for &item_in in &outside {
            let new_weight = current.total_weight - freed_weight + instance.weights[item_in];
            if new_weight > instance.capacity {
                continue;
            }
            if current
                .items()
                .any(|r| r != item_out && instance.has_conflict(item_in, r))
            {
                continue;
            }

            let mut neighbor = current.clone();
            neighbor.remove_item(item_out, freed_profit, freed_weight);
            neighbor.add_item(item_in, instance.profits[item_in], instance.weights[item_in]);
            neighbor.is_feasible = true;
            neighborhood.push(neighbor);
        }
    }

    neighborhood
}

/// Swap(2-1): remove an unordered selected pair, add one outside item.
///
/// The incoming item must strictly out-profit the removed pair; that
/// admission filter runs before the weight and conflict checks. Empty
/// whenever fewer than two items are selected.
pub fn swap_2_1(instance: &Instance, current: &Solution) -> Vec<Solution> {
    let selected: Vec<usize> = current.items().collect();
    if selected.len() < 2 {
        return Vec::new();
    }
    let outside = outside_items(instance, current);

    let mut neighborhood = Vec::new();

    for (position, &out1) in selected.iter().enumerate() {
        for &out2 in &selected[position + 1..] {
            let freed_weight = instance.weights[out1] + instance.weights[out2];
            let freed_profit = instance.profits[out1] + instance.profits[out2];

            for &item_in in &outside {
                if instance.profits[item_in] <= freed_profit {
                    continue;
                }
                let new_weight =
                    current.total_weight - freed_weight + instance.weights[item_in];
                if new_weight > instance.capacity {
                    continue;
                }
                if current
                    .items()
                    .any(|r| r != out1 && r != out2 && instance.has_conflict(item_in, r))
                {
                    continue;
                }

                let mut neighbor = current.clone();
                neighbor.remove_item(out1, instance.profits[out1], instance.weights[out1]);
                neighbor.remove_item(out2, instance.profits[out2], instance.weights[out2]);
                neighbor.add_item(
                    item_in,
                    instance.profits[item_in],
                    instance.weights[item_in],
                );
                neighbor.is_feasible = true;
                neighborhood.push(neighbor);
            }
        }
    }

    neighborhood
}

/// The strictly improving neighbour of greatest profit, or `None` at a
/// local optimum. The first enumerated neighbour wins profit ties.
pub fn best_improving(current: &Solution, neighborhood: &[Solution]) -> Option<Solution> {
    let mut best: Option<&Solution> = None;
    for neighbor in neighborhood {
        if neighbor.total_profit > current.total_profit
            && best.is_none_or(|b| neighbor.total_profit > b.total_profit)
        {
            best = Some(neighbor);
        }
    }
    best.cloned()
}
