use rstest::rstest;

use super::*;

// Precomputed answers for the tree on eleven leaves:
//
//                                              X
//                      X
//          X                       X                       X
//    X           X           X           X           X
// X     X     X     X     X     X     X     X     X     X     X
// 0  1  2  3  4  5  6  7  8  9  a  b  c  d  e  f 10 11 12 13 14
const N: LeafCount = 11;

const ROOTS: [u32; 10] = [0x00, 0x01, 0x03, 0x03, 0x07, 0x07, 0x07, 0x07, 0x0f, 0x0f];
const LOG2: [usize; 21] = [
    0x00, 0x00, 0x01, 0x01, 0x02, 0x02, 0x02, 0x02, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03,
    0x03, 0x04, 0x04, 0x04, 0x04, 0x04,
];
const LEVEL: [usize; 21] = [
    0x00, 0x01, 0x00, 0x02, 0x00, 0x01, 0x00, 0x03, 0x00, 0x01, 0x00, 0x02, 0x00, 0x01, 0x00,
    0x04, 0x00, 0x01, 0x00, 0x02, 0x00,
];
const LEFT: [u32; 21] = [
    0x00, 0x00, 0x02, 0x01, 0x04, 0x04, 0x06, 0x03, 0x08, 0x08, 0x0a, 0x09, 0x0c, 0x0c, 0x0e,
    0x07, 0x10, 0x10, 0x12, 0x11, 0x14,
];
const RIGHT: [u32; 21] = [
    0x00, 0x02, 0x02, 0x05, 0x04, 0x06, 0x06, 0x0b, 0x08, 0x0a, 0x0a, 0x0d, 0x0c, 0x0e, 0x0e,
    0x13, 0x10, 0x12, 0x12, 0x14, 0x14,
];
const PARENT: [u32; 21] = [
    0x01, 0x03, 0x01, 0x07, 0x05, 0x03, 0x05, 0x0f, 0x09, 0x0b, 0x09, 0x07, 0x0d, 0x0b, 0x0d,
    0x0f, 0x11, 0x13, 0x11, 0x0f, 0x13,
];
const SIBLING: [u32; 21] = [
    0x02, 0x05, 0x00, 0x0b, 0x06, 0x01, 0x04, 0x13, 0x0a, 0x0d, 0x08, 0x03, 0x0e, 0x09, 0x0c,
    0x0f, 0x12, 0x14, 0x10, 0x07, 0x11,
];

fn indices(raw: &[u32]) -> Vec<NodeIndex> {
    raw.iter().map(|&i| NodeIndex::new(i)).collect()
}

#[test]
fn size_properties() {
    for n in 1..N {
        assert_eq!(root(n), NodeIndex::new(ROOTS[n as usize - 1]), "root({n})");
    }
    assert_eq!(node_width(0), 0);
    assert_eq!(node_width(1), 1);
    assert_eq!(node_width(N), 21);
}

#[test]
fn node_relations() {
    for i in 0..node_width(N) {
        let x = NodeIndex::new(i);
        let idx = i as usize;
        assert_eq!(log2(i), LOG2[idx], "log2 @ {x}");
        assert_eq!(level(x), LEVEL[idx], "level @ {x}");
        assert_eq!(left(x), NodeIndex::new(LEFT[idx]), "left @ {x}");
        assert_eq!(right(x, N), NodeIndex::new(RIGHT[idx]), "right @ {x}");
        assert_eq!(parent(x, N), NodeIndex::new(PARENT[idx]), "parent @ {x}");
        assert_eq!(sibling(x, N), NodeIndex::new(SIBLING[idx]), "sibling @ {x}");
    }
}

#[test]
fn paths() {
    let dirpaths: [&[u32]; 21] = [
        &[0x00, 0x01, 0x03, 0x07, 0x0f],
        &[0x01, 0x03, 0x07, 0x0f],
        &[0x02, 0x01, 0x03, 0x07, 0x0f],
        &[0x03, 0x07, 0x0f],
        &[0x04, 0x05, 0x03, 0x07, 0x0f],
        &[0x05, 0x03, 0x07, 0x0f],
        &[0x06, 0x05, 0x03, 0x07, 0x0f],
        &[0x07, 0x0f],
        &[0x08, 0x09, 0x0b, 0x07, 0x0f],
        &[0x09, 0x0b, 0x07, 0x0f],
        &[0x0a, 0x09, 0x0b, 0x07, 0x0f],
        &[0x0b, 0x07, 0x0f],
        &[0x0c, 0x0d, 0x0b, 0x07, 0x0f],
        &[0x0d, 0x0b, 0x07, 0x0f],
        &[0x0e, 0x0d, 0x0b, 0x07, 0x0f],
        &[0x0f],
        &[0x10, 0x11, 0x13, 0x0f],
        &[0x11, 0x13, 0x0f],
        &[0x12, 0x11, 0x13, 0x0f],
        &[0x13, 0x0f],
        &[0x14, 0x13, 0x0f],
    ];
    let copaths: [&[u32]; 21] = [
        &[0x02, 0x05, 0x0b, 0x13],
        &[0x05, 0x0b, 0x13],
        &[0x00, 0x05, 0x0b, 0x13],
        &[0x0b, 0x13],
        &[0x06, 0x01, 0x0b, 0x13],
        &[0x01, 0x0b, 0x13],
        &[0x04, 0x01, 0x0b, 0x13],
        &[0x13],
        &[0x0a, 0x0d, 0x03, 0x13],
        &[0x0d, 0x03, 0x13],
        &[0x08, 0x0d, 0x03, 0x13],
        &[0x03, 0x13],
        &[0x0e, 0x09, 0x03, 0x13],
        &[0x09, 0x03, 0x13],
        &[0x0c, 0x09, 0x03, 0x13],
        &[],
        &[0x12, 0x14, 0x07],
        &[0x14, 0x07],
        &[0x10, 0x14, 0x07],
        &[0x07],
        &[0x11, 0x07],
    ];

    for i in 0..node_width(N) {
        let x = NodeIndex::new(i);
        assert_eq!(dirpath(x, N), indices(dirpaths[i as usize]), "dirpath @ {x}");
        assert_eq!(copath(x, N), indices(copaths[i as usize]), "copath @ {x}");
    }
}

#[test]
fn single_leaf_tree() {
    let leaf = NodeIndex::new(0);
    assert_eq!(root(1), leaf);
    assert_eq!(parent(leaf, 1), leaf);
    assert_eq!(sibling(leaf, 1), leaf);
    assert_eq!(dirpath(leaf, 1), vec![leaf]);
    assert!(copath(leaf, 1).is_empty());
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(5)]
#[case(8)]
#[case(11)]
#[case(21)]
#[case(32)]
#[case(33)]
#[case(100)]
fn topology_invariants(#[case] n: LeafCount) {
    let width = node_width(n);
    let r = root(n);
    assert_eq!(width, 2 * n - 1);
    assert!(r.as_u32() < width);

    for i in 0..width {
        let x = NodeIndex::new(i);
        let path = dirpath(x, n);
        assert_eq!(path.first(), Some(&x));
        assert_eq!(path.last(), Some(&r));
        assert_eq!(path.iter().filter(|&&y| y == r).count(), 1);
        assert!(path.iter().all(|y| is_node_in_tree(*y, n)));
        // Levels strictly increase towards the root.
        assert!(path.windows(2).all(|w| level(w[0]) < level(w[1])));

        let co = copath(x, n);
        assert_eq!(co.len(), path.len() - 1);
        assert!(co.iter().all(|y| is_node_in_tree(*y, n)));

        if x != r {
            let s = sibling(x, n);
            assert_ne!(s, x);
            assert_eq!(parent(x, n), parent(s, n));
            let p = parent(x, n);
            assert!(left(p) == x || right(p, n) == x);
        }
    }
}

#[test]
fn appending_keeps_indices_stable() {
    // Growing the tree never moves existing leaves, and every node of the
    // smaller tree is still a node of the larger one.
    for n in 1..64 {
        for i in 0..node_width(n) {
            assert!(is_node_in_tree(NodeIndex::new(i), n + 1));
        }
        assert!(!is_node_in_tree(NodeIndex::new(node_width(n + 1)), n + 1));
    }
}

#[test]
fn lowest_common_ancestors() {
    let n = 5;
    let lca = |x: u32, y: u32| lowest_common_ancestor(NodeIndex::new(x), NodeIndex::new(y), n);
    assert_eq!(lca(0, 2), NodeIndex::new(1));
    assert_eq!(lca(0, 1), NodeIndex::new(1));
    assert_eq!(lca(8, 4), NodeIndex::new(7));
    assert_eq!(lca(4, 1), NodeIndex::new(3));
    assert_eq!(lca(0, 0), NodeIndex::new(0));
    assert_eq!(lca(6, 8), NodeIndex::new(7));

    // A single leaf is its own ancestor.
    assert_eq!(
        lowest_common_ancestor(NodeIndex::new(0), NodeIndex::new(0), 1),
        NodeIndex::new(0)
    );
}

#[test]
fn checked_paths() {
    assert_eq!(
        checked_dirpath(NodeIndex::new(0), 0),
        Err(TreeMathError::EmptyTree)
    );
    assert_eq!(
        checked_dirpath(NodeIndex::new(9), 5),
        Err(TreeMathError::NodeNotInTree)
    );
    assert_eq!(
        checked_copath(NodeIndex::new(21), N),
        Err(TreeMathError::NodeNotInTree)
    );
    assert_eq!(
        checked_copath(NodeIndex::new(0), N),
        Ok(indices(&[0x02, 0x05, 0x0b, 0x13]))
    );
    assert_eq!(
        leaf_direct_path(LeafIndex::new(4), 5),
        indices(&[0x08, 0x07])
    );
    assert_eq!(leaf_copath(LeafIndex::new(4), 5), indices(&[0x03]));
}

#[test]
fn index_conversions() {
    assert_eq!(NodeIndex::from(LeafIndex::new(3)), NodeIndex::new(6));
    assert_eq!(LeafIndex::try_from(NodeIndex::new(6)), Ok(LeafIndex::new(3)));
    assert_eq!(
        LeafIndex::try_from(NodeIndex::new(7)),
        Err(TreeMathError::NotALeaf)
    );
    assert!(NodeIndex::new(4).is_leaf());
    assert!(NodeIndex::new(5).is_parent());
    assert_eq!(format!("{}", NodeIndex::new(0x13)), "0x13");
}

#[test]
fn large_trees_stay_in_range() {
    let n = MAX_LEAF_COUNT;
    let last_leaf = NodeIndex::from(LeafIndex::new(n - 1));
    assert_eq!(root(n), NodeIndex::new((1 << 30) - 1));
    let path = dirpath(last_leaf, n);
    assert_eq!(path.len(), 31);
    assert_eq!(path.last(), Some(&root(n)));
}
