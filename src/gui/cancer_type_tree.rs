use std::collections::{
    HashMap,
    HashSet,
};

use eframe::egui;
use egui_ltreeview::{
    TreeView,
    TreeViewBuilder,
    TreeViewState,
};

use crate::core::{
    CancerType,
    Study,
};

/// Left-hand cancer type hierarchy. Picking a node reports the shown
/// studies under that type (including descendants) so the app can add them
/// to the selection.
pub struct CancerTypeTree {
    state: TreeViewState<String>,
    last_picked: Option<String>,
}

impl CancerTypeTree {
    pub fn new() -> Self {
        Self { state: TreeViewState::default(), last_picked: None }
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        cancer_types: &[CancerType],
        shown: &[&Study],
    ) -> Option<Vec<String>> {
        if cancer_types.is_empty() {
            ui.weak("No cancer types loaded");
            return None;
        }

        let known: HashSet<&str> = cancer_types.iter().map(|t| t.cancer_type_id.as_str()).collect();
        let mut children: HashMap<&str, Vec<&CancerType>> = HashMap::new();
        let mut roots: Vec<&CancerType> = Vec::new();

        for cancer_type in cancer_types {
            let parent = cancer_type
                .parent
                .as_deref()
                .filter(|p| known.contains(p) && *p != cancer_type.cancer_type_id);
            match parent {
                Some(parent) => children.entry(parent).or_default().push(cancer_type),
                None => roots.push(cancer_type),
            }
        }

        let tree_id = ui.make_persistent_id("cancer_type_tree");
        TreeView::new(tree_id).allow_multi_selection(false).show_state(
            ui,
            &mut self.state,
            |builder| {
                for root in &roots {
                    build_node(builder, root, &children, shown);
                }
            },
        );

        let picked = self.state.selected().first().cloned();
        if picked == self.last_picked {
            return None;
        }
        self.last_picked = picked.clone();

        let type_id = picked?;
        let descendants = descendant_type_ids(&type_id, &children);
        let matched: Vec<String> = shown
            .iter()
            .filter(|study| descendants.contains(study.cancer_type_id.as_str()))
            .map(|study| study.study_id.clone())
            .collect();

        (!matched.is_empty()).then_some(matched)
    }
}

impl Default for CancerTypeTree {
    fn default() -> Self {
        Self::new()
    }
}

fn build_node(
    builder: &mut TreeViewBuilder<String>,
    node: &CancerType,
    children: &HashMap<&str, Vec<&CancerType>>,
    shown: &[&Study],
) {
    let descendants = descendant_type_ids(&node.cancer_type_id, children);
    let study_count = shown
        .iter()
        .filter(|study| descendants.contains(study.cancer_type_id.as_str()))
        .count();
    let label = format!("{} ({})", node.name, study_count);

    match children.get(node.cancer_type_id.as_str()) {
        Some(child_nodes) => {
            builder.dir(node.cancer_type_id.clone(), label);
            for child in child_nodes {
                build_node(builder, child, children, shown);
            }
            builder.close_dir();
        }
        None => {
            builder.leaf(node.cancer_type_id.clone(), label);
        }
    }
}

fn descendant_type_ids(type_id: &str, children: &HashMap<&str, Vec<&CancerType>>) -> HashSet<String> {
    let mut out = HashSet::new();
    let mut stack = vec![type_id.to_string()];
    while let Some(current) = stack.pop() {
        if !out.insert(current.clone()) {
            continue;
        }
        if let Some(child_nodes) = children.get(current.as_str()) {
            for child in child_nodes {
                stack.push(child.cancer_type_id.clone());
            }
        }
    }
    out
}
