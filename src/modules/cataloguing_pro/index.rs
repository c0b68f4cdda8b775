//! Flat code → record index over every taxonomy level

use std::collections::HashMap;

use crate::models::{DescriptiveRecord, TaxonomyNode};

#[derive(Debug, Clone, Default)]
pub struct FlatIndex {
    records: HashMap<String, DescriptiveRecord>,
}

impl FlatIndex {
    /// One record per node, keyed by the node's unexpanded code.
    ///
    /// Within a class, divisions are inserted before their subclass and
    /// subclasses before the class, so on a duplicated code the shallower
    /// node wins.
    pub fn build(taxonomy: &[TaxonomyNode]) -> Self {
        let mut records = HashMap::new();

        for class in taxonomy {
            for subclass in &class.children {
                for division in &subclass.children {
                    insert(&mut records, &[class, subclass, division]);
                }
                insert(&mut records, &[class, subclass]);
            }
            insert(&mut records, &[class]);
        }

        Self { records }
    }

    pub fn get(&self, code: &str) -> Option<&DescriptiveRecord> {
        self.records.get(code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn insert(records: &mut HashMap<String, DescriptiveRecord>, chain: &[&TaxonomyNode]) {
    let Some(node) = chain.last() else {
        return;
    };
    records.insert(
        node.code.clone(),
        DescriptiveRecord {
            code: node.code.clone(),
            name: node.name.clone(),
            path: chain.iter().map(|n| n.code.clone()).collect(),
            name_path: chain.iter().map(|n| n.name.clone()).collect(),
        },
    );
}
