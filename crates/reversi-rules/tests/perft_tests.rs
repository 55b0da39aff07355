use reversi_rules::perft::perft_root;

#[test]
fn test_perft() {
    let expected = [4, 12, 56, 244, 1_396, 8_200];
    for (depth, nodes) in (1..).zip(expected) {
        assert_eq!(perft_root(depth), nodes, "perft mismatch at depth {depth}");
    }
}
