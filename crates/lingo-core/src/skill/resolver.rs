//! Learning-order reconstruction from per-skill dependency lists.
//!
//! Skills are grouped by their first dependency name; skills sharing a
//! dependency set share a position, so one name identifies the whole set.
//! The walk starts at the roots and follows, one group at a time, the
//! group whose key is a name from the group just processed.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use lingo_types::skill::Skill;

/// Return copies of `skills` annotated with their `dependency_order`.
///
/// - Roots (no dependencies) get 0; each following group gets the next index.
/// - When several names of the processed group are themselves dependency
///   keys, the first one in input order is followed. The walk is a single
///   thread, so groups hanging off the other names stay unassigned.
/// - Unreached skills keep `dependency_order == None`.
/// - Already visited keys are never followed again, so a cycle or a
///   duplicated name cannot end the walk while another candidate remains.
pub fn compute_dependency_order(skills: &[Skill]) -> Vec<Skill> {
    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, skill) in skills.iter().enumerate() {
        groups.entry(skill.dependency_key()).or_default().push(idx);
    }

    let mut ordered: Vec<Skill> = skills
        .iter()
        .cloned()
        .map(|mut skill| {
            skill.dependency_order = None;
            skill
        })
        .collect();

    let mut visited: HashSet<&str> = HashSet::new();
    let mut key = "";
    let mut index: u32 = 0;

    loop {
        visited.insert(key);

        let Some(members) = groups.get(key) else {
            break;
        };

        for &idx in members {
            ordered[idx].dependency_order = Some(index);
        }
        index += 1;

        // Nothing unvisited depends on this group: the walk is done.
        let next = members
            .iter()
            .map(|&idx| skills[idx].name.as_str())
            .find(|name| groups.contains_key(name) && !visited.contains(name));

        match next {
            Some(name) => key = name,
            None => {
                debug!(key, assigned = index, "Dependency walk finished");
                break;
            }
        }
    }

    ordered
}

/// Learned skills in learning order.
///
/// Stable ascending sort on `dependency_order`; unassigned skills come after
/// every assigned one and keep their input order.
pub fn learned_skills(skills: &[Skill]) -> Vec<Skill> {
    let mut learned: Vec<Skill> = compute_dependency_order(skills)
        .into_iter()
        .filter(|skill| skill.learned)
        .collect();

    learned.sort_by_key(|skill| skill.dependency_order.unwrap_or(u32::MAX));
    learned
}
