use medialib_tree::medialib::{LibraryIndex, MediaLibrary, MediaLibraryItem, PlayItem};
use medialib_tree::tree::{NodeKind, TreeDataSource, TreeError, TreeNode};

fn library() -> MediaLibrary {
    MediaLibrary::from_tracks(
        vec!["/music".into()],
        vec![
            PlayItem::new("/music/Radiohead/OK Computer/01.flac")
                .with_title("Airbag")
                .with_artist("Radiohead")
                .with_album("OK Computer")
                .with_genre("Rock")
                .with_track_number(1),
            PlayItem::new("/music/Radiohead/OK Computer/02.flac")
                .with_title("Paranoid Android")
                .with_artist("Radiohead")
                .with_album("OK Computer")
                .with_genre("Rock")
                .with_track_number(2),
            PlayItem::new("/music/Miles Davis/Kind of Blue/01.flac")
                .with_title("So What")
                .with_artist("Miles Davis")
                .with_album("Kind of Blue")
                .with_genre("Jazz")
                .with_track_number(1),
            PlayItem::new("/music/loose.mp3"),
        ],
    )
}

/// Every node reachable from `node`, depth first, including `node`.
fn all_nodes<'a>(node: TreeNode<'a>, out: &mut Vec<TreeNode<'a>>) {
    out.push(node);
    for child in node.children() {
        all_nodes(child, out);
    }
}

fn for_every_index(check: impl Fn(TreeNode<'_>)) {
    let library = library();
    for index in LibraryIndex::ALL {
        let list = library.list(index);
        let mut nodes = Vec::new();
        all_nodes(TreeNode::root(&list), &mut nodes);
        assert!(nodes.len() > 1, "{index} tree is empty");
        for node in nodes {
            check(node);
        }
    }
}

#[test]
fn test_leaves_have_no_children() {
    let track = PlayItem::new("/music/solo.ogg").with_title("Solo");
    let leaf = TreeNode::leaf(&track);
    assert_eq!(leaf.child_count(), 0);
    assert!(leaf.children().is_empty());

    for_every_index(|node| {
        if node.kind() == NodeKind::Leaf {
            assert_eq!(node.child_count(), 0);
            assert!(node.children().is_empty());
        }
    });
}

#[test]
fn test_children_length_matches_child_count() {
    for_every_index(|node| {
        assert_eq!(node.children().len(), node.child_count());
    });
}

#[test]
fn test_child_at_matches_underlying_item_type() {
    let library = library();
    let list = library.list(LibraryIndex::Folder);

    fn check(item: &MediaLibraryItem, node: TreeNode<'_>) {
        let expected = if item.play_item().is_some() {
            NodeKind::Leaf
        } else {
            NodeKind::Branch
        };
        assert_eq!(node.kind(), expected, "{}", item.text());
        for (i, child) in item.children().iter().enumerate() {
            check(child, node.child_at(i).unwrap());
        }
    }

    let root = TreeNode::root(&list);
    for (i, item) in list.items().iter().enumerate() {
        check(item, root.child_at(i).unwrap());
    }
}

#[test]
fn test_display_text_is_deterministic() {
    let library = library();
    let list = library.list(LibraryIndex::Artist);

    assert_eq!(
        TreeNode::root(&list).display_text(),
        TreeNode::root(&list).display_text()
    );
    for item in list.items() {
        assert_eq!(
            TreeNode::branch(item).display_text(),
            TreeNode::branch(item).display_text()
        );
    }
    for track in library.tracks() {
        assert_eq!(
            TreeNode::leaf(track).display_text(),
            TreeNode::leaf(track).display_text()
        );
    }
}

#[test]
fn test_children_and_child_at_agree() {
    for_every_index(|node| {
        let via_children: Vec<String> = node
            .children()
            .iter()
            .map(|c| c.display_text().into_owned())
            .collect();
        let via_index: Vec<String> = (0..node.child_count())
            .map(|i| node.child_at(i).unwrap().display_text().into_owned())
            .collect();
        assert_eq!(via_children, via_index);
    });
}

#[test]
fn test_out_of_range_child_is_an_error() {
    let library = library();
    let list = library.list(LibraryIndex::Genre);
    let root = TreeNode::root(&list);
    let count = root.child_count();

    assert_eq!(
        root.child_at(count).err(),
        Some(TreeError::IndexOutOfRange { index: count, count })
    );

    let track = PlayItem::new("/music/solo.ogg");
    assert_eq!(
        TreeNode::leaf(&track).child_at(0).err(),
        Some(TreeError::IndexOutOfRange { index: 0, count: 0 })
    );
}

#[test]
fn test_untagged_track_groups_under_placeholder() {
    let library = library();
    let list = library.list(LibraryIndex::Artist);
    let root = TreeNode::root(&list);
    let labels: Vec<String> = root
        .children()
        .iter()
        .map(|c| c.display_text().into_owned())
        .collect();

    assert_eq!(labels, vec!["<?>", "Miles Davis", "Radiohead"]);
}
