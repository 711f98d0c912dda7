use nodebench_canvas::{compute_bounds, NodeElement, NoteElement};
use proptest::prelude::*;

#[test]
fn test_empty_workspace_bounds() {
    let region = compute_bounds([], []);
    assert_eq!((region.width, region.height), (1.0, 1.0));
}

#[test]
fn test_mixed_scene_bounds() {
    let nodes = vec![NodeElement::new("Add", 0.0, 0.0, 10.0, 10.0)];
    let notes = vec![NoteElement::new("reminder", 20.0, 5.0, 5.0, 5.0)];
    let region = compute_bounds(&nodes, &notes);
    assert_eq!((region.width, region.height), (25.0, 15.0));
}

#[test]
fn test_order_of_collections_does_not_matter() {
    let a = vec![
        NodeElement::new("A", 5.0, 40.0, 10.0, 10.0),
        NodeElement::new("B", 90.0, 2.0, 30.0, 8.0),
    ];
    let b = vec![NoteElement::new("n", 1.0, 1.0, 200.0, 3.0)];

    let region = compute_bounds(&a, &b);
    assert_eq!((region.width, region.height), (201.0, 50.0));
}

proptest! {
    #[test]
    fn prop_bounds_cover_every_element(
        elements in prop::collection::vec(
            (0.0f64..500.0, 0.0f64..500.0, 0.0f64..100.0, 0.0f64..100.0),
            0..20,
        )
    ) {
        let nodes: Vec<NodeElement> = elements
            .iter()
            .map(|&(x, y, w, h)| NodeElement::new("n", x, y, w, h))
            .collect();
        let region = compute_bounds(&nodes, []);

        prop_assert!(region.width >= 1.0);
        prop_assert!(region.height >= 1.0);
        for n in &nodes {
            prop_assert!(region.width >= n.x + n.width);
            prop_assert!(region.height >= n.y + n.height);
        }
    }

    #[test]
    fn prop_pixel_size_never_degenerate(
        x in -100.0f64..500.0,
        y in -100.0f64..500.0,
        w in 0.0f64..100.0,
        h in 0.0f64..100.0,
    ) {
        let nodes = [NodeElement::new("n", x, y, w, h)];
        let (pw, ph) = compute_bounds(&nodes, []).pixel_size();
        prop_assert!(pw >= 1);
        prop_assert!(ph >= 1);
    }
}
