//! Batch runs against a temporary directory.

use rddlgen::{BatchDomain, BatchError, BatchPlan, FailurePolicy};
use std::fs;

#[test]
fn wildfire_batch_writes_sorted_named_files() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("wildfire");
    let plan = BatchPlan {
        sizes: 3..=4,
        ..BatchPlan::new(BatchDomain::Wildfire, 9)
    };
    let report = plan.run(&out).unwrap();
    assert!(report.failures.is_empty());
    assert_eq!(report.written.len(), 4);

    // (3,3) has the smallest area so it is instance 0.
    let first = fs::read_to_string(out.join("wildfire_inst_mdp__0.rddl")).unwrap();
    assert!(first.contains("x_pos : {x1,x2,x3};"));
    assert!(first.contains("TARGET(x3,y3);"));
    assert!(first.contains("burning(x1,y1);"));
    let last = fs::read_to_string(out.join("wildfire_inst_mdp__3.rddl")).unwrap();
    assert!(last.contains("x_pos : {x1,x2,x3,x4};"));
    assert!(last.contains("y_pos : {y1,y2,y3,y4};"));
}

#[test]
fn navigation_batch_is_reproducible() {
    let tmp = tempfile::tempdir().unwrap();
    let plan = BatchPlan {
        sizes: 5..=6,
        ..BatchPlan::new(BatchDomain::Navigation, 123)
    };
    let a = tmp.path().join("a");
    let b = tmp.path().join("b");
    plan.run(&a).unwrap();
    plan.run(&b).unwrap();
    for n in 0..4 {
        let name = format!("navigation_inst_mdp__{n}.rddl");
        let left = fs::read_to_string(a.join(&name)).unwrap();
        let right = fs::read_to_string(b.join(&name)).unwrap();
        assert_eq!(left, right, "{name} differs between runs");
        rddlgen_test_utils::assert_balanced(&left);
        assert!(left.contains("horizon = 100;"));
        assert!(left.contains("discount = 0.95;"));
    }
}

#[test]
fn distinct_instances_use_distinct_seeds() {
    let tmp = tempfile::tempdir().unwrap();
    let plan = BatchPlan {
        sizes: 5..=5,
        ..BatchPlan::new(BatchDomain::Navigation, 0)
    };
    plan.run(tmp.path()).unwrap();
    let other = tmp.path().join("shifted");
    BatchPlan { base_seed: 1, ..plan.clone() }.run(&other).unwrap();
    let a = fs::read_to_string(tmp.path().join("navigation_inst_mdp__0.rddl")).unwrap();
    let b = fs::read_to_string(other.join("navigation_inst_mdp__0.rddl")).unwrap();
    assert_ne!(a, b);
}

#[test]
fn invalid_range_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("never");
    let plan = BatchPlan {
        sizes: 0..=2,
        policy: FailurePolicy::Continue,
        ..BatchPlan::new(BatchDomain::Navigation, 0)
    };
    let err = plan.run(&out).unwrap_err();
    assert!(matches!(err, BatchError::Plan(ref e) if e.is_invalid_argument()));
    assert!(!out.exists());
}

#[test]
fn unwritable_directory_aborts_with_instance_name() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();
    let plan = BatchPlan {
        sizes: 1..=1,
        ..BatchPlan::new(BatchDomain::Wildfire, 0)
    };
    match plan.run(&blocker.join("sub")) {
        Err(BatchError::Instance { name, .. }) => assert_eq!(name, "wildfire_inst_mdp__0"),
        other => panic!("expected instance failure, got {other:?}"),
    }

    let report = BatchPlan {
        policy: FailurePolicy::Continue,
        ..plan
    }
    .run(&blocker.join("sub"))
    .unwrap();
    assert!(report.written.is_empty());
    assert_eq!(report.failures.len(), 1);
}
