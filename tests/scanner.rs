use medialib_tree::medialib::{LibraryIndex, MediaLibError, MediaLibrary, Scanner};
use medialib_tree::tree::{TreeDataSource, TreeNode};
use std::fs;
use std::path::Path;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"not audio").unwrap();
}

fn music_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(root, "Boards of Canada/Geogaddi/02 Music Is Math.mp3");
    touch(root, "Boards of Canada/Geogaddi/01 Ready Lets Go.flac");
    touch(root, "loose.ogg");
    touch(root, "cover.jpg");
    touch(root, ".trash/deleted.mp3");
    touch(root, "Boards of Canada/.thumbs/hidden.mp3");
    dir
}

fn labels(node: TreeNode<'_>) -> Vec<String> {
    node.children()
        .iter()
        .map(|c| c.display_text().into_owned())
        .collect()
}

#[test]
fn test_scan_skips_hidden_entries_and_other_extensions() {
    let dir = music_dir();
    let tracks = Scanner::default().scan(&[dir.path().to_path_buf()]).unwrap();

    let mut names: Vec<String> = tracks.iter().map(|t| t.display_title()).collect();
    names.sort();
    assert_eq!(names, vec!["01 Ready Lets Go", "02 Music Is Math", "loose"]);
}

#[test]
fn test_custom_extensions() {
    let dir = music_dir();
    let tracks = Scanner::new(["ogg"]).scan(&[dir.path().to_path_buf()]).unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].display_title(), "loose");
}

#[test]
fn test_missing_roots_are_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let err = Scanner::default().scan(&[missing.clone()]).unwrap_err();
    assert!(matches!(err, MediaLibError::NoMusicRoots(ref roots) if roots == &vec![missing]));
}

#[test]
fn test_one_bad_root_does_not_fail_the_scan() {
    let dir = music_dir();
    let roots = vec![dir.path().join("missing"), dir.path().to_path_buf()];
    let tracks = Scanner::default().scan(&roots).unwrap();
    assert_eq!(tracks.len(), 3);
}

#[test]
fn test_nested_and_repeated_roots_scan_each_file_once() {
    let dir = music_dir();
    let album = dir.path().join("Boards of Canada");
    let roots = vec![dir.path().to_path_buf(), album.clone(), dir.path().to_path_buf()];

    let tracks = Scanner::default().scan(&roots).unwrap();
    assert_eq!(tracks.len(), 3);

    let library = MediaLibrary::scan(roots, &Scanner::default()).unwrap();
    let list = library.list(LibraryIndex::Album);
    assert_eq!(TreeNode::root(&list).child_at(0).unwrap().child_count(), 3);

    // The inner root still owns its files in the folder view
    let list = library.list(LibraryIndex::Folder);
    assert_eq!(labels(TreeNode::root(&list)).len(), 2);
}

#[test]
fn test_folder_tree_from_scan() {
    let dir = music_dir();
    let library = MediaLibrary::scan(vec![dir.path().to_path_buf()], &Scanner::default()).unwrap();
    let list = library.list(LibraryIndex::Folder);
    let root = TreeNode::root(&list);

    // Directories first, then files
    assert_eq!(labels(root), vec!["Boards of Canada", "loose"]);

    let album = root.descend(&[0, 0]).unwrap();
    assert_eq!(album.display_text(), "Geogaddi");
    assert_eq!(labels(album), vec!["01 Ready Lets Go", "02 Music Is Math"]);
    assert!(album.child_at(0).unwrap().is_leaf());
}

#[test]
fn test_untagged_files_group_under_placeholder() {
    let dir = music_dir();
    let library = MediaLibrary::scan(vec![dir.path().to_path_buf()], &Scanner::default()).unwrap();
    let list = library.list(LibraryIndex::Album);
    let root = TreeNode::root(&list);

    assert_eq!(labels(root), vec!["<?> - <?>"]);
    assert_eq!(root.child_at(0).unwrap().child_count(), 3);
}
