//! Tests for TreeArena operations on a realistic fixture

use rstest::{fixture, rstest};

use treeq::util::testing;
use treeq::{TreeArena, TreeBuilder, TreeComparison, TreeError};

const SAMPLE: &[&str] = &[
    "root",
    " src",
    "  org",
    "   math",
    "    Array.java",
    "    Matrix.java",
    "    QuatRot.java",
    "    Vector.java",
    "   model",
    "    generic",
    "     Constant.java",
    "     Constant.xml",
    "    geometric",
    "     Constant2.java",
    "     Constant2.xml",
    "    Component.java",
    "    DynamicComponent.java",
    "    Folder afterwards",
    "     PerturbDerivative1.java",
    "      PerturbDerivative2.java",
    "      PerturbDerivative3.java",
    "     PerturbDerivative4.java",
    "      PerturbDerivative5.java",
    "      PerturbDerivative6.java",
    " test",
    "  org2",
    "   avl",
    "    allegro.avl",
    "    allegro.mass",
    "    b737.avl",
    "   simulink",
    "    complex.mdl",
    "    long_simple.mdl",
    "    sf_tetris2.mdl",
    " RunAllTests.java",
];

#[fixture]
fn sample_tree() -> TreeArena<String> {
    testing::init_test_setup();
    TreeBuilder::new().build_from_lines(SAMPLE).unwrap()
}

// ============================================================
// Structure Tests
// ============================================================

#[rstest]
fn given_sample_fixture_when_building_then_returns_correct_depth(sample_tree: TreeArena<String>) {
    assert_eq!(sample_tree.depth(), 7);
}

#[rstest]
fn given_sample_fixture_when_collecting_leaves_then_returns_all_leaves(
    sample_tree: TreeArena<String>,
) {
    let leaves = sample_tree.leaf_nodes();
    assert_eq!(leaves.len(), 21);

    // Left-to-right order
    assert_eq!(
        sample_tree.content(leaves[0]),
        Some(&"Array.java".to_string())
    );
    assert_eq!(
        sample_tree.content(*leaves.last().unwrap()),
        Some(&"RunAllTests.java".to_string())
    );
}

// ============================================================
// Iterator Tests
// ============================================================

#[rstest]
fn given_tree_when_iterating_then_visits_all_nodes_preorder(sample_tree: TreeArena<String>) {
    let visited: Vec<&str> = sample_tree
        .iter()
        .map(|(_, node)| node.content.as_str())
        .collect();

    assert_eq!(visited.len(), SAMPLE.len());
    // Pre-order matches the fixture line order
    let expected: Vec<&str> = SAMPLE.iter().map(|line| line.trim_start()).collect();
    assert_eq!(visited, expected);
}

#[rstest]
fn given_tree_when_postorder_iterating_then_visits_leaves_before_root(
    sample_tree: TreeArena<String>,
) {
    let visited: Vec<&str> = sample_tree
        .iter_postorder()
        .map(|(_, node)| node.content.as_str())
        .collect();

    assert_eq!(visited.len(), SAMPLE.len());
    assert_eq!(visited.first(), Some(&"Array.java"));
    assert_eq!(visited.last(), Some(&"root"));
}

// ============================================================
// Lookup Tests
// ============================================================

#[rstest]
fn given_path_keys_when_finding_then_descends_level_by_level(sample_tree: TreeArena<String>) {
    let root = sample_tree.root().unwrap();

    let array = sample_tree
        .find_by_path(root, &["src", "org", "math", "Array.java"])
        .unwrap();

    assert_eq!(sample_tree.content(array), Some(&"Array.java".to_string()));
    let parent = sample_tree.get_node(array).unwrap().parent.unwrap();
    assert_eq!(sample_tree.content(parent), Some(&"math".to_string()));
}

#[rstest]
fn given_missing_segment_when_finding_by_path_then_reports_key_and_depth(
    sample_tree: TreeArena<String>,
) {
    let root = sample_tree.root().unwrap();

    let result = sample_tree.find_by_path(root, &["src", "org", "nope", "Array.java"]);

    match result {
        Err(TreeError::PathNotFound { segment, depth }) => {
            assert_eq!(segment, "nope");
            assert_eq!(depth, 2);
        }
        other => panic!("expected PathNotFound, got {:?}", other),
    }
}

#[rstest]
fn given_content_key_when_searching_then_returns_first_preorder_match(
    sample_tree: TreeArena<String>,
) {
    let root = sample_tree.root().unwrap();

    let allegro = sample_tree.find_by_content(root, &"allegro.avl").unwrap();

    assert_eq!(
        sample_tree.content(allegro),
        Some(&"allegro.avl".to_string())
    );
}

#[rstest]
fn given_absent_content_when_searching_then_errors(sample_tree: TreeArena<String>) {
    let root = sample_tree.root().unwrap();

    let result = sample_tree.find_by_content(root, &"missing.txt");

    assert!(matches!(result, Err(TreeError::ContentNotFound(_))));
}

#[test]
fn given_duplicate_sibling_content_when_finding_then_first_match_wins() {
    // Arrange - two "dup" siblings distinguishable only by their children
    let lines = ["root", " dup", "  first", " dup", "  second"];
    let tree = TreeBuilder::new().build_from_lines(&lines).unwrap();
    let root = tree.root().unwrap();

    // Act
    let dup = tree.find_by_path(root, &["dup"]).unwrap();

    // Assert - insertion order is authoritative
    let child = tree.get_node(dup).unwrap().children[0];
    assert_eq!(tree.content(child), Some(&"first".to_string()));
    assert_eq!(dup, tree.find_by_content(root, &"dup").unwrap());
}

#[rstest]
fn given_search_start_below_root_when_searching_then_scope_is_subtree(
    sample_tree: TreeArena<String>,
) {
    let root = sample_tree.root().unwrap();
    let test_dir = sample_tree.find_by_path(root, &["test"]).unwrap();

    // Array.java lives under src, not test
    let result = sample_tree.find_by_content(test_dir, &"Array.java");

    assert!(matches!(result, Err(TreeError::ContentNotFound(_))));
}

// ============================================================
// Serialization Tests
// ============================================================

#[rstest]
fn given_tree_when_serializing_then_round_trips(sample_tree: TreeArena<String>) {
    // Put the tree into its string form
    let text = sample_tree.to_string_deep();
    // Turn it back into a tree
    let pieces: Vec<&str> = text.split('\n').collect();
    let copied = TreeBuilder::new().build_from_lines(&pieces).unwrap();

    // The strings are identical
    assert_eq!(text, copied.to_string_deep());
    // And so is the underlying tree
    TreeComparison::of(&sample_tree, &copied).assert_equal();
}

#[rstest]
fn given_tree_when_serializing_then_reproduces_fixture_lines(sample_tree: TreeArena<String>) {
    let expected: Vec<String> = SAMPLE.iter().map(|line| line.to_string()).collect();
    assert_eq!(sample_tree.to_string_deep(), expected.join("\n"));
}

// ============================================================
// Display Tests
// ============================================================

#[rstest]
fn given_tree_when_rendering_then_shows_all_contents(sample_tree: TreeArena<String>) {
    let rendered = sample_tree.to_display_tree().unwrap().to_string();

    assert!(rendered.starts_with("root"));
    assert!(rendered.contains("Matrix.java"));
    assert!(rendered.contains("sf_tetris2.mdl"));
}
