//! Model graph resolution.
//!
//! Models form an inheritance forest through their `subTypes` lists. The
//! resolver flattens that forest so every type carries its ancestors' fields
//! and no parent link survives.
//!
//! Resolution keeps two sets: `pending` candidates and `resolved` types. Each
//! pass moves every pending root (a candidate with no parent) into the
//! resolved set after copying its fields into its direct subtypes, which then
//! become roots for the next pass. A pass that finds no root while work is
//! left means the remaining types wait on each other, i.e. a cycle.

use crate::error::SchemaError;
use crate::ir::{FieldRecord, TypeRecord};
use crate::types::ModelDef;
use indexmap::IndexMap;
use tracing::{debug, warn};

/// How to treat a model listed as a subtype by more than one parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InheritancePolicy {
    /// Fail with `SchemaError::MultipleParents`.
    #[default]
    Reject,
    /// Keep the parent that appears last in document order.
    LastWriterWins,
}

/// Resolves raw model definitions into flattened type records.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelResolver {
    policy: InheritancePolicy,
}

impl ModelResolver {
    /// Creates a resolver with the given inheritance policy.
    #[must_use]
    pub const fn new(policy: InheritancePolicy) -> Self {
        Self { policy }
    }

    /// Returns the inheritance policy.
    #[must_use]
    pub const fn policy(&self) -> InheritancePolicy {
        self.policy
    }

    /// Resolves models into type records, keyed and ordered as in the input.
    ///
    /// # Errors
    /// Returns `SchemaError::EmptyIdentifier` for an empty property key,
    /// `SchemaError::UnknownSubtype` for a dangling `subTypes` entry,
    /// `SchemaError::MultipleParents` when a subtype has two parents under
    /// `InheritancePolicy::Reject`, and `SchemaError::CyclicInheritance` when
    /// the subtype graph has a cycle.
    pub fn resolve(
        &self,
        models: &IndexMap<String, ModelDef>,
    ) -> Result<IndexMap<String, TypeRecord>, SchemaError> {
        let mut pending = build_candidates(models)?;
        self.link(&mut pending)?;
        let mut resolved = flatten(pending)?;

        let mut ordered = IndexMap::with_capacity(resolved.len());
        for name in models.keys() {
            if let Some(record) = resolved.swap_remove(name) {
                ordered.insert(name.clone(), record);
            }
        }
        Ok(ordered)
    }

    /// Points every listed subtype at the model listing it.
    fn link(&self, pending: &mut IndexMap<String, TypeRecord>) -> Result<(), SchemaError> {
        let claims: Vec<(String, String)> = pending
            .values()
            .flat_map(|t| t.subtypes.iter().map(move |st| (t.name.clone(), st.clone())))
            .collect();

        for (parent, subtype) in claims {
            let record =
                pending
                    .get_mut(&subtype)
                    .ok_or_else(|| SchemaError::UnknownSubtype {
                        parent: parent.clone(),
                        subtype: subtype.clone(),
                    })?;

            if let Some(first) = record.parent.as_deref() {
                if first != parent {
                    match self.policy {
                        InheritancePolicy::Reject => {
                            return Err(SchemaError::MultipleParents {
                                subtype,
                                first: first.to_string(),
                                second: parent,
                            });
                        }
                        InheritancePolicy::LastWriterWins => {
                            warn!(
                                subtype = %subtype,
                                dropped = %first,
                                kept = %parent,
                                "model has several parents, keeping the last one"
                            );
                        }
                    }
                }
            }
            record.parent = Some(parent);
        }
        Ok(())
    }
}

/// Resolves models with the given policy.
///
/// # Errors
/// See [`ModelResolver::resolve`].
pub fn resolve(
    models: &IndexMap<String, ModelDef>,
    policy: InheritancePolicy,
) -> Result<IndexMap<String, TypeRecord>, SchemaError> {
    ModelResolver::new(policy).resolve(models)
}

/// Builds one unlinked candidate per model.
fn build_candidates(
    models: &IndexMap<String, ModelDef>,
) -> Result<IndexMap<String, TypeRecord>, SchemaError> {
    models
        .iter()
        .map(|(name, def)| {
            let fields = def
                .properties
                .iter()
                .map(|(key, prop)| {
                    FieldRecord::from_property(key, &prop.data_type).map_err(|_| {
                        SchemaError::empty_identifier(format!("property name of model '{name}'"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            let record = TypeRecord {
                name: name.clone(),
                description: def.description.clone(),
                fields,
                subtypes: def.sub_types.iter().cloned().collect(),
                parent: None,
            };
            Ok::<_, SchemaError>((name.clone(), record))
        })
        .collect()
}

/// Moves candidates from `pending` to the resolved set, roots first.
fn flatten(
    mut pending: IndexMap<String, TypeRecord>,
) -> Result<IndexMap<String, TypeRecord>, SchemaError> {
    let mut resolved = IndexMap::with_capacity(pending.len());
    let mut pass = 0usize;

    while !pending.is_empty() {
        pass += 1;
        let roots: Vec<String> = pending
            .values()
            .filter(|t| !t.has_parent())
            .map(|t| t.name.clone())
            .collect();

        if roots.is_empty() {
            return Err(SchemaError::CyclicInheritance {
                path: cycle_path(&pending),
            });
        }

        debug!(
            pass,
            roots = roots.len(),
            remaining = pending.len(),
            "flattening inheritance pass"
        );

        for name in roots {
            let Some(root) = pending.shift_remove(&name) else {
                continue;
            };
            for subtype in &root.subtypes {
                if let Some(child) = pending.get_mut(subtype) {
                    if child.parent.as_deref() == Some(root.name.as_str()) {
                        inherit_fields(child, &root.fields);
                        child.parent = None;
                    }
                }
            }
            resolved.insert(name, root);
        }
    }

    Ok(resolved)
}

/// Places the inherited fields ahead of the child's own.
///
/// A field the child redefines keeps the child's definition.
fn inherit_fields(child: &mut TypeRecord, inherited: &[FieldRecord]) {
    let mut fields: Vec<FieldRecord> = inherited
        .iter()
        .filter(|f| !child.has_wire_name(&f.wire_name))
        .cloned()
        .collect();
    fields.append(&mut child.fields);
    child.fields = fields;
}

/// Follows parent links from the first stuck candidate until one repeats.
fn cycle_path(pending: &IndexMap<String, TypeRecord>) -> String {
    let mut trail: Vec<&str> = Vec::new();
    let mut current = pending.keys().next().map(String::as_str);

    while let Some(name) = current {
        if let Some(pos) = trail.iter().position(|seen| *seen == name) {
            let mut cycle = trail[pos..].to_vec();
            cycle.push(name);
            return cycle.join(" -> ");
        }
        trail.push(name);
        current = pending.get(name).and_then(|t| t.parent.as_deref());
    }

    trail.join(" -> ")
}
