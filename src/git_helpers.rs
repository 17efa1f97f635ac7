use git2::{ObjectType, Oid, Repository};
use std::collections::hash_map::{Entry, HashMap};

/// Builds the tag index of a repository: a mapping from each tagged commit to a tag name.
///
/// Lightweight tags point to their commit directly. Annotated tags are dereferenced
/// exactly once to the commit they reference. Tag names are returned without the
/// `"refs/tags/"` prefix.
///
/// If several tags point to the same commit, the lexicographically smallest tag
/// name is kept, so the result doesn't depend on the order git enumerates tags in.
/// Lightweight and annotated tags are treated the same.
///
/// # Errors
///
/// Returns a [`git2::Error`] and stops at the first tag that fails, if:
/// - Tag iteration fails
/// - A tag name is not valid UTF-8
/// - A tag name doesn't start with `"refs/tags/"` (should not happen with valid repos)
/// - A tag object can't be read, or doesn't resolve to a commit
pub fn tag_index(repo: &Repository) -> Result<HashMap<Oid, String>, git2::Error> {
    let mut result: HashMap<Oid, String> = HashMap::new();
    // `Repository::tag_foreach` doesn't let the callback return an error, so we
    // remember the first one here and stop iterating.
    let mut error = None;
    let foreach_result = repo.tag_foreach(|target, name| {
        let entry = tag_name(name).and_then(|name| Ok((tagged_commit(repo, target)?, name)));
        match entry {
            Ok((commit_id, name)) => {
                match result.entry(commit_id) {
                    Entry::Occupied(mut entry) => {
                        if name < *entry.get() {
                            entry.insert(name);
                        }
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(name);
                    }
                }
                true
            }
            Err(err) => {
                assert!(
                    error.is_none(),
                    "We immediately exit after an error so this can't be set yet"
                );
                error = Some(err);
                false
            }
        }
    });

    if let Some(error) = error {
        return Err(error);
    }
    foreach_result?;
    Ok(result)
}

fn tag_name(name: &[u8]) -> Result<String, git2::Error> {
    let name = std::str::from_utf8(name)
        .map_err(|err| git2::Error::from_str(&format!("Tag name is not valid UTF-8: {}", err)))?;
    let name = name.strip_prefix("refs/tags/").ok_or_else(|| {
        git2::Error::from_str(&format!(
            "Tag name '{}' doesn't start with 'refs/tags/'",
            name
        ))
    })?;
    Ok(name.to_owned())
}

/// Resolves the object a tag ref points to into a commit id, following at most one annotated tag.
fn tagged_commit(repo: &Repository, target: Oid) -> Result<Oid, git2::Error> {
    let object = repo.find_object(target, None)?;
    let commit = match object.into_tag() {
        Ok(tag) => tag.target()?,
        Err(object) => object,
    };
    match commit.kind() {
        Some(ObjectType::Commit) => Ok(commit.id()),
        kind => Err(git2::Error::from_str(&format!(
            "Tag target {} is a {} and not a commit",
            target,
            kind.map_or("unknown object", |kind| kind.str())
        ))),
    }
}
