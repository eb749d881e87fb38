//! Structured intermediate for a generated instance.
//!
//! A [`Document`] is an ordered list of typed declaration records. Topology
//! and parameter stages append to it, the obfuscation stage renames and
//! reorders it, and the serializer renders it as a last, pure step.

use crate::fact::Fact;
use crate::instance::InstanceDescriptor;
use std::collections::BTreeMap;

/// One object type of the `objects` block, e.g. `xpos : {x1,x2};`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectType {
    /// Type name.
    pub name: String,
    /// Object names in emission order.
    pub objects: Vec<String>,
}

impl ObjectType {
    /// Create an object type declaration.
    pub fn new(name: impl Into<String>, objects: Vec<String>) -> Self {
        Self {
            name: name.into(),
            objects,
        }
    }
}

/// A line of the non-fluents body.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    /// A static fact.
    Fact(Fact),
    /// A `//` comment line; carries no semantics.
    Comment(String),
}

/// A complete instance: non-fluents block plus instance block.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// Scalar metadata shared by both blocks.
    pub descriptor: InstanceDescriptor,
    /// Object type declarations.
    pub objects: Vec<ObjectType>,
    /// Body of the non-fluents block, in emission order.
    pub non_fluents: Vec<Entry>,
    /// Dynamic facts of the `init-state` block.
    pub init_state: Vec<Fact>,
}

impl Document {
    /// Create an empty document for `descriptor`.
    pub fn new(descriptor: InstanceDescriptor) -> Self {
        Self {
            descriptor,
            objects: Vec::new(),
            non_fluents: Vec::new(),
            init_state: Vec::new(),
        }
    }

    /// Append a static fact.
    pub fn push_fact(&mut self, fact: Fact) {
        self.non_fluents.push(Entry::Fact(fact));
    }

    /// Append a comment line to the non-fluents body.
    pub fn push_comment(&mut self, text: impl Into<String>) {
        self.non_fluents.push(Entry::Comment(text.into()));
    }

    /// Static facts in emission order, skipping comments.
    pub fn facts(&self) -> impl Iterator<Item = &Fact> {
        self.non_fluents.iter().filter_map(|e| match e {
            Entry::Fact(f) => Some(f),
            Entry::Comment(_) => None,
        })
    }

    /// Static facts with the given predicate.
    pub fn facts_named<'a>(&'a self, predicate: &'a str) -> impl Iterator<Item = &'a Fact> + 'a {
        self.facts().filter(move |f| f.predicate == predicate)
    }

    /// Rename every object occurrence: type declarations, fact arguments
    /// and init-state arguments. Comments are left untouched.
    pub fn rename_objects(&mut self, mut rename: impl FnMut(&str) -> String) {
        for ty in &mut self.objects {
            for obj in &mut ty.objects {
                *obj = rename(obj.as_str());
            }
        }
        for entry in &mut self.non_fluents {
            if let Entry::Fact(f) = entry {
                f.rename_args(&mut rename);
            }
        }
        for f in &mut self.init_state {
            f.rename_args(&mut rename);
        }
    }

    /// Drop every comment from the non-fluents body.
    pub fn strip_comments(&mut self) {
        self.non_fluents.retain(|e| matches!(e, Entry::Fact(_)));
    }

    /// Order-independent view of the relational content.
    ///
    /// Two documents that a reader would reconstruct into the same
    /// objects, facts and initial state have equal canonical forms,
    /// regardless of declaration order.
    pub fn canonical(&self) -> CanonicalForm {
        let objects = self
            .objects
            .iter()
            .map(|ty| {
                let mut objs = ty.objects.clone();
                objs.sort();
                (ty.name.clone(), objs)
            })
            .collect();
        let mut non_fluents: Vec<String> = self.facts().map(ToString::to_string).collect();
        non_fluents.sort();
        let mut init_state: Vec<String> = self.init_state.iter().map(ToString::to_string).collect();
        init_state.sort();
        CanonicalForm {
            objects,
            non_fluents,
            init_state,
        }
    }
}

/// Sorted, order-free rendering of a [`Document`]'s relational content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalForm {
    /// Object names per type, sorted.
    pub objects: BTreeMap<String, Vec<String>>,
    /// Rendered static facts, sorted.
    pub non_fluents: Vec<String>,
    /// Rendered init-state facts, sorted.
    pub init_state: Vec<String>,
}
