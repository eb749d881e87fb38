//! Block-structured rendering.

use rddlgen_core::{format_real, Document, Entry};
use std::fmt;

/// Display adapter rendering a [`Document`] as RDDL text.
///
/// ```
/// use rddlgen_core::{Document, Fact, InstanceDescriptor, ObjectType};
/// use rddlgen_rddl::RddlDocument;
///
/// let mut doc = Document::new(InstanceDescriptor {
///     name: "demo".into(),
///     domain: "demo_mdp".into(),
///     horizon: 5,
///     discount: 1.0,
///     max_nondef_actions: 1,
/// });
/// doc.objects.push(ObjectType::new("xpos", vec!["x1".into()]));
/// doc.push_fact(Fact::new("MIN-XPOS", ["x1"]));
/// let text = RddlDocument(&doc).to_string();
/// assert!(text.starts_with("non-fluents nf_demo {\n"));
/// assert!(text.contains("\t\tMIN-XPOS(x1);\n"));
/// assert!(text.ends_with("\tdiscount = 1.0;\n}\n"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RddlDocument<'a>(pub &'a Document);

impl fmt::Display for RddlDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.0;
        let d = &doc.descriptor;
        let nf_name = d.non_fluents_name();

        writeln!(f, "non-fluents {nf_name} {{")?;
        writeln!(f, "\tdomain = {};", d.domain)?;
        writeln!(f, "\tobjects {{")?;
        for ty in &doc.objects {
            writeln!(f, "\t\t{} : {{{}}};", ty.name, ty.objects.join(","))?;
        }
        writeln!(f, "\t}};")?;
        writeln!(f, "\tnon-fluents {{")?;
        for entry in &doc.non_fluents {
            match entry {
                Entry::Fact(fact) => writeln!(f, "\t\t{fact};")?,
                Entry::Comment(text) => writeln!(f, "\t\t// {text}")?,
            }
        }
        writeln!(f, "\t}};")?;
        writeln!(f, "}}")?;
        writeln!(f)?;

        writeln!(f, "instance {} {{", d.name)?;
        writeln!(f, "\tdomain = {};", d.domain)?;
        writeln!(f, "\tnon-fluents = {nf_name};")?;
        writeln!(f, "\tinit-state {{")?;
        for fact in &doc.init_state {
            writeln!(f, "\t\t{fact};")?;
        }
        writeln!(f, "\t}};")?;
        writeln!(f, "\tmax-nondef-actions = {};", d.max_nondef_actions)?;
        writeln!(f, "\thorizon = {};", d.horizon)?;
        writeln!(f, "\tdiscount = {};", format_real(d.discount))?;
        writeln!(f, "}}")
    }
}

/// Render `doc` as RDDL text.
pub fn render(doc: &Document) -> String {
    RddlDocument(doc).to_string()
}
