//! Repository fixtures shared by the unit tests.

use git2::{Commit, Oid, Repository};
use std::path::Path;

pub fn create_repo(path: &Path) -> Repository {
    let repo = Repository::init(path).unwrap();
    repo.config()
        .unwrap()
        .set_str("user.name", "Test User")
        .unwrap();
    repo.config()
        .unwrap()
        .set_str("user.email", "test@example.com")
        .unwrap();
    repo
}

pub fn commit_with_parents(repo: &Repository, content: &str, parents: &[&Commit]) -> Oid {
    std::fs::write(repo.workdir().unwrap().join("file.txt"), content).unwrap();

    let mut index = repo.index().unwrap();
    index
        .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();

    let sig = repo.signature().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    repo.commit(
        Some("HEAD"),
        &sig,
        &sig,
        &format!("Commit: {}", content),
        &tree,
        parents,
    )
    .unwrap()
}

/// Commits on top of HEAD, or creates the root commit if the repository is empty.
pub fn create_commit(repo: &Repository, content: &str) -> Oid {
    let parent = repo.head().ok().map(|head| head.peel_to_commit().unwrap());
    let parents: Vec<&Commit> = parent.iter().collect();
    commit_with_parents(repo, content, &parents)
}

pub fn create_lightweight_tag(repo: &Repository, tag_name: &str) {
    let head_commit = repo
        .head()
        .unwrap()
        .peel(git2::ObjectType::Commit)
        .unwrap();
    repo.tag_lightweight(tag_name, &head_commit, true).unwrap();
}

pub fn create_annotated_tag(repo: &Repository, tag_name: &str) -> Oid {
    let head_commit = repo
        .head()
        .unwrap()
        .peel(git2::ObjectType::Commit)
        .unwrap();
    let sig = repo.signature().unwrap();
    repo.tag(tag_name, &head_commit, &sig, "Release", true)
        .unwrap()
}

/// Tags the tree of HEAD instead of a commit.
pub fn create_tree_tag(repo: &Repository, tag_name: &str) {
    let tree = repo
        .head()
        .unwrap()
        .peel(git2::ObjectType::Tree)
        .unwrap();
    repo.tag_lightweight(tag_name, &tree, true).unwrap();
}

/// Writes a tag ref pointing to an object that doesn't exist in the repository.
pub fn create_dangling_tag(repo: &Repository, tag_name: &str) {
    std::fs::write(
        repo.path().join("refs").join("tags").join(tag_name),
        "1111111111111111111111111111111111111111\n",
    )
    .unwrap();
}
