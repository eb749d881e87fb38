//! End-to-end scenarios: config in, rendered text out.

use rddlgen_domains::{
    seeded_rng, Domain, Navigation, NavigationConfig, ObfuscationMode, Wildfire, WildfireConfig,
};
use rddlgen_space::Connectivity;
use rddlgen_test_utils::{
    count_facts, fact_strings, render_balanced, undirected_pairs, TEST_SEEDS,
};

#[test]
fn navigation_2x2_plain() {
    let nav = Navigation::new(NavigationConfig {
        size_x: 2,
        size_y: 2,
        mode: ObfuscationMode::Normal,
        horizon: 10,
        discount: 0.9,
    });
    let doc = nav
        .generate("navigation_inst_mdp__0", &mut seeded_rng(1))
        .unwrap()
        .document;
    let text = render_balanced(&doc);

    assert!(text.contains("\t\txpos : {x1,x2};\n"));
    assert!(text.contains("\t\typos : {y1,y2};\n"));
    assert_eq!(
        fact_strings(&doc),
        vec![
            "NORTH(y1,y2)",
            "SOUTH(y2,y1)",
            "EAST(x1,x2)",
            "WEST(x2,x1)",
            "MIN-XPOS(x1)",
            "MAX-XPOS(x2)",
            "MIN-YPOS(y1)",
            "MAX-YPOS(y2)",
            "GOAL(x2,y2)",
        ]
    );
    assert_eq!(count_facts(&doc, "NORTH"), 1);
    assert_eq!(count_facts(&doc, "SOUTH"), 1);
    assert_eq!(count_facts(&doc, "EAST"), 1);
    assert_eq!(count_facts(&doc, "WEST"), 1);
    assert!(text.contains("\t\tGOAL(x2,y2);\n"));
    assert!(text.contains("\t\trobot-at(x2,y1);\n"));
    assert_eq!(count_facts(&doc, "P"), 0);
    assert!(text.contains("\tmax-nondef-actions = 1;\n"));
    assert!(text.contains("\thorizon = 10;\n"));
    assert!(text.contains("\tdiscount = 0.9;\n"));
    assert!(text.contains("instance navigation_inst_mdp__0 {"));
    assert!(text.contains("\tnon-fluents = nf_navigation_inst_mdp__0;\n"));
}

#[test]
fn wildfire_3x3_four_connected() {
    let wf = Wildfire::new(WildfireConfig {
        size_x: 3,
        size_y: 3,
        targets: Some(vec!["x2,y2".into()]),
        initial_burning: Some(vec!["x1,y1".into()]),
        connectivity: Connectivity::Four,
        ..WildfireConfig::default()
    });
    let doc = wf.generate("wildfire_3x3", &mut seeded_rng(1)).unwrap().document;
    let text = render_balanced(&doc);

    let (pairs, symmetric) = undirected_pairs(&doc, "NEIGHBOR");
    assert_eq!(pairs, 12);
    assert!(symmetric);
    assert_eq!(count_facts(&doc, "NEIGHBOR"), 24);
    assert!(!text.contains("NEIGHBOR(x1,y1,x2,y2)"));
    assert_eq!(count_facts(&doc, "TARGET"), 1);
    assert_eq!(text.matches("burning(").count(), 1);
    assert!(text.contains("\t\tburning(x1,y1);\n"));
    assert!(text.contains("\t\tx_pos : {x1,x2,x3};\n"));
}

#[test]
fn same_seed_same_text() {
    for seed in TEST_SEEDS {
        for mode in [ObfuscationMode::Normal, ObfuscationMode::Obfuscate] {
            let nav = Navigation::new(NavigationConfig {
                size_x: 6,
                size_y: 5,
                mode,
                ..NavigationConfig::default()
            });
            let a = nav.generate("n", &mut seeded_rng(seed)).unwrap().document;
            let b = nav.generate("n", &mut seeded_rng(seed)).unwrap().document;
            assert_eq!(render_balanced(&a), render_balanced(&b));
        }
    }
}

#[test]
fn degenerate_grids_generate() {
    for (x, y) in [(1, 1), (1, 5), (5, 1)] {
        let nav = Navigation::new(NavigationConfig {
            size_x: x,
            size_y: y,
            ..NavigationConfig::default()
        });
        let doc = nav.generate("n", &mut seeded_rng(0)).unwrap().document;
        render_balanced(&doc);
        if x == 1 {
            assert_eq!(count_facts(&doc, "EAST") + count_facts(&doc, "WEST"), 0);
        }
        if y == 1 {
            assert_eq!(count_facts(&doc, "NORTH") + count_facts(&doc, "SOUTH"), 0);
        }

        let wf = Wildfire::new(WildfireConfig {
            size_x: x,
            size_y: y,
            ..WildfireConfig::default()
        });
        let doc = wf.generate("w", &mut seeded_rng(0)).unwrap().document;
        render_balanced(&doc);
        assert_eq!(
            count_facts(&doc, "NEIGHBOR") as u64,
            rddlgen_space::expected_edge_count(x, y, Connectivity::Eight)
        );
    }
}
