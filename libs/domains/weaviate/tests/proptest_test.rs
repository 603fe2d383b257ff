//! Property tests for the wire translation layer.

use std::collections::BTreeSet;

use domain_weaviate::codec::vector::{decode_floats, decode_ints, encode, encode_ints};
use domain_weaviate::filters::resolve;
use domain_weaviate::*;
use proptest::prelude::*;
use prost::Message;
use rpc::weaviate_v1::{
    BatchObjectsReply, FilterTarget, batch_objects_reply::BatchError, filter_target::Target,
};

fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,12}"
}

/// Follow a resolved chain to its innermost node.
fn leaf(mut node: FilterTarget) -> Option<Target> {
    loop {
        match node.target? {
            Target::SingleTarget(link) => node = *link.target?,
            Target::MultiTarget(link) => node = *link.target?,
            terminal => return Some(terminal),
        }
    }
}

fn arb_query() -> impl Strategy<Value = (String, u32, Vec<String>)> {
    (
        "[a-z ]{1,20}".prop_filter("non-blank", |q| !q.trim().is_empty()),
        1u32..500,
        prop::collection::vec(arb_name(), 0..4),
    )
}

proptest! {
    #[test]
    fn vector_roundtrip(v in prop::collection::vec(
        any::<f32>().prop_filter("finite", |f| f.is_finite()),
        0..256
    )) {
        let bytes = encode(&v);
        prop_assert_eq!(bytes.len(), 4 * v.len());
        prop_assert_eq!(decode_floats(&bytes).expect("decoding should succeed"), v);
    }

    #[test]
    fn int_list_roundtrip(v in prop::collection::vec(-(1i64 << 52)..(1i64 << 52), 0..64)) {
        let decoded = decode_ints(&encode_ints(&v)).expect("decoding should succeed");
        prop_assert_eq!(decoded, v);
    }

    #[test]
    fn reference_chain_ends_in_leaf(
        links in prop::collection::vec((arb_name(), prop::option::of(arb_name())), 1..6),
        property in arb_name(),
        count in any::<bool>(),
    ) {
        let (first, first_target) = &links[0];
        let mut chain = match first_target {
            Some(collection) => Filter::by_ref_multi_target(first.clone(), collection.clone()),
            None => Filter::by_ref(first.clone()),
        };
        for (link_on, target) in &links[1..] {
            chain = match target {
                Some(collection) => chain.by_ref_multi_target(link_on.clone(), collection.clone()),
                None => chain.by_ref(link_on.clone()),
            };
        }
        let filter = if count {
            chain.by_ref_count(property.clone())
        } else {
            chain.by_property(property.clone())
        };

        let resolved = resolve(filter.target()).expect("chain should resolve");
        match leaf(resolved) {
            Some(Target::Property(name)) => prop_assert!(!count && name == property),
            Some(Target::Count(c)) => prop_assert!(count && c.on == property),
            other => prop_assert!(false, "unexpected leaf {:?}", other),
        }
    }

    #[test]
    fn serialization_is_deterministic((query, limit, props) in arb_query()) {
        let context = CollectionContext::new("Article").with_tenant("acme");
        let serializer = QuerySerializer::new(&context, Capabilities::latest());
        let mut common = QueryOptions::new()
            .with_limit(limit)
            .with_filters(Filter::by_property("title").like("*shoe*"));
        if !props.is_empty() {
            common = common.with_properties(props.clone());
        }
        let options = Bm25Options {
            query_properties: props.clone(),
            common,
            ..Default::default()
        };

        let first = serializer.bm25(&query, &options).expect("valid bm25");
        let second = serializer.bm25(&query, &options).expect("valid bm25");
        prop_assert_eq!(first.encode_to_vec(), second.encode_to_vec());
    }

    #[test]
    fn batch_correlation(size in 1usize..40, failures in prop::collection::btree_set(0usize..40, 0..40)) {
        let failures: BTreeSet<usize> = failures.into_iter().filter(|i| *i < size).collect();
        let objects: Vec<BatchObject> = (0..size).map(|_| BatchObject::new("Article")).collect();
        let sent = batch::to_wire(&objects, false, None, &Capabilities::latest())
            .expect("mapping should succeed");
        let reply = BatchObjectsReply {
            took: 0.0,
            errors: failures
                .iter()
                .map(|i| BatchError { index: *i as i32, error: format!("failed {}", i) })
                .collect(),
        };

        let result = batch::from_reply(reply, &objects, &sent, 0.0).expect("valid reply");

        prop_assert_eq!(result.all_responses.len(), size);
        prop_assert_eq!(result.has_errors, !failures.is_empty());
        for index in 0..size {
            let in_uuids = result.uuids.contains_key(&index);
            let in_errors = result.errors.contains_key(&index);
            prop_assert!(in_uuids != in_errors);
            prop_assert_eq!(in_errors, failures.contains(&index));
        }
    }
}
