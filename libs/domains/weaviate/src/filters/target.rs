//! Filter targets: plain properties, reference counts and reference
//! traversal chains of any depth.
//!
//! Chains are persistent. Extending a chain returns a new one and shares
//! nothing mutable with the original, so a partially built chain can be
//! reused as the prefix of several filters.

use std::sync::Arc;

use rpc::weaviate_v1::{
    FilterReferenceCount, FilterReferenceMultiTarget, FilterReferenceSingleTarget, FilterTarget,
    filter_target,
};

use crate::error::{WeaviateError, WeaviateResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetNode {
    Property(String),
    Count(String),
    Reference {
        link_on: String,
        /// Set for references that may point into several collections.
        target_collection: Option<String>,
        target: Option<Arc<TargetNode>>,
    },
}

impl TargetNode {
    pub fn property(name: impl Into<String>) -> Self {
        TargetNode::Property(name.into())
    }

    pub fn count(link_on: impl Into<String>) -> Self {
        TargetNode::Count(link_on.into())
    }

    pub fn reference(link_on: impl Into<String>) -> Self {
        TargetNode::Reference {
            link_on: link_on.into(),
            target_collection: None,
            target: None,
        }
    }

    pub fn multi_target_reference(
        link_on: impl Into<String>,
        target_collection: impl Into<String>,
    ) -> Self {
        TargetNode::Reference {
            link_on: link_on.into(),
            target_collection: Some(target_collection.into()),
            target: None,
        }
    }

    /// True once the innermost node is a property or a count.
    pub fn is_terminal(&self) -> bool {
        match self {
            TargetNode::Property(_) | TargetNode::Count(_) => true,
            TargetNode::Reference { target, .. } => {
                target.as_deref().is_some_and(TargetNode::is_terminal)
            }
        }
    }

    /// Human readable path such as `hasCategory>name`.
    pub fn path(&self) -> String {
        match self {
            TargetNode::Property(name) => name.clone(),
            TargetNode::Count(on) => format!("count({})", on),
            TargetNode::Reference {
                link_on, target, ..
            } => match target {
                Some(inner) => format!("{}>{}", link_on, inner.path()),
                None => format!("{}>?", link_on),
            },
        }
    }
}

/// Return a new chain with `leaf` placed at the innermost open link.
pub fn attach(chain: &TargetNode, leaf: TargetNode) -> WeaviateResult<TargetNode> {
    if chain.is_terminal() {
        return Err(WeaviateError::InvalidFilterTarget(format!(
            "cannot extend terminal target '{}' with '{}'",
            chain.path(),
            leaf.path()
        )));
    }
    Ok(extend_open(chain, leaf))
}

/// Copy the links of a chain that is known to be open and close it with
/// `leaf`. Callers must hold a non-terminal chain.
pub(crate) fn extend_open(chain: &TargetNode, leaf: TargetNode) -> TargetNode {
    match chain {
        TargetNode::Reference {
            link_on,
            target_collection,
            target,
        } => {
            let inner = match target {
                Some(inner) => extend_open(inner, leaf),
                None => leaf,
            };
            TargetNode::Reference {
                link_on: link_on.clone(),
                target_collection: target_collection.clone(),
                target: Some(Arc::new(inner)),
            }
        }
        terminal => terminal.clone(),
    }
}

fn non_empty<'a>(name: &'a str, what: &str) -> WeaviateResult<&'a str> {
    if name.trim().is_empty() {
        Err(WeaviateError::InvalidFilterTarget(format!(
            "{} name must not be empty",
            what
        )))
    } else {
        Ok(name)
    }
}

/// Resolve a chain into the nested wire target, outermost link first.
pub fn resolve(node: &TargetNode) -> WeaviateResult<FilterTarget> {
    let target = match node {
        TargetNode::Property(name) => {
            filter_target::Target::Property(non_empty(name, "property")?.to_string())
        }
        TargetNode::Count(on) => filter_target::Target::Count(FilterReferenceCount {
            on: non_empty(on, "reference")?.to_string(),
        }),
        TargetNode::Reference {
            link_on,
            target_collection,
            target,
        } => {
            let inner = target.as_deref().ok_or_else(|| {
                WeaviateError::InvalidFilterTarget(format!(
                    "reference '{}' does not lead to a property or count",
                    link_on
                ))
            })?;
            let on = non_empty(link_on, "reference")?.to_string();
            let inner = Some(Box::new(resolve(inner)?));
            match target_collection {
                Some(collection) => {
                    filter_target::Target::MultiTarget(FilterReferenceMultiTarget {
                        on,
                        target: inner,
                        target_collection: non_empty(collection, "target collection")?
                            .to_string(),
                    })
                }
                None => filter_target::Target::SingleTarget(FilterReferenceSingleTarget {
                    on,
                    target: inner,
                }),
            }
        }
    };
    Ok(FilterTarget {
        target: Some(target),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_does_not_modify_original() {
        let chain = TargetNode::reference("hasCategory");
        let extended = attach(&chain, TargetNode::property("name")).unwrap();

        assert!(!chain.is_terminal());
        assert!(extended.is_terminal());
        assert_eq!(extended.path(), "hasCategory>name");
    }

    #[test]
    fn test_shared_prefix() {
        let prefix = attach(
            &TargetNode::reference("writtenBy"),
            TargetNode::reference("livesIn"),
        )
        .unwrap();
        let a = attach(&prefix, TargetNode::property("city")).unwrap();
        let b = attach(&prefix, TargetNode::count("neighbours")).unwrap();

        assert_eq!(a.path(), "writtenBy>livesIn>city");
        assert_eq!(b.path(), "writtenBy>livesIn>count(neighbours)");
        assert_eq!(prefix.path(), "writtenBy>livesIn>?");
    }

    #[test]
    fn test_attach_past_terminal_fails() {
        let err = attach(&TargetNode::property("name"), TargetNode::property("x")).unwrap_err();
        assert!(matches!(err, WeaviateError::InvalidFilterTarget(_)));
    }

    #[test]
    fn test_resolve_single_target() {
        let chain = attach(
            &TargetNode::reference("hasCategory"),
            TargetNode::property("name"),
        )
        .unwrap();
        let resolved = resolve(&chain).unwrap();

        let Some(filter_target::Target::SingleTarget(single)) = resolved.target else {
            panic!("expected single target");
        };
        assert_eq!(single.on, "hasCategory");
        assert_eq!(
            single.target.unwrap().target,
            Some(filter_target::Target::Property("name".into()))
        );
    }

    #[test]
    fn test_resolve_multi_target_keeps_collection() {
        let chain = attach(
            &TargetNode::multi_target_reference("mentions", "Person"),
            TargetNode::count("friends"),
        )
        .unwrap();
        let Some(filter_target::Target::MultiTarget(multi)) = resolve(&chain).unwrap().target
        else {
            panic!("expected multi target");
        };
        assert_eq!(multi.target_collection, "Person");
        assert!(matches!(
            multi.target.unwrap().target,
            Some(filter_target::Target::Count(_))
        ));
    }

    #[test]
    fn test_dangling_reference_fails() {
        let err = resolve(&TargetNode::reference("hasCategory")).unwrap_err();
        assert!(matches!(err, WeaviateError::InvalidFilterTarget(_)));
    }

    #[test]
    fn test_empty_names_fail() {
        assert!(resolve(&TargetNode::property("")).is_err());
        let chain = attach(&TargetNode::reference(" "), TargetNode::property("x")).unwrap();
        assert!(resolve(&chain).is_err());
    }
}
