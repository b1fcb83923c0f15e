//! Unit tests for gallery flattening

#[cfg(test)]
mod tests {
    use crate::gallery::{FolderMode, GalleryTree, flatten_recursive, preview_sample, visible_files};
    use crate::testing::{folder, gallery_file};

    fn ids<'a>(files: impl IntoIterator<Item = &'a crate::gallery::GalleryFile>) -> Vec<i64> {
        files.into_iter().map(|file| file.id).collect()
    }

    fn scenario_tree() -> GalleryTree {
        folder(
            vec![gallery_file(1, 3), gallery_file(2, 1)],
            vec![("B", folder(vec![gallery_file(3, 2)], vec![]))],
        )
    }

    #[test]
    fn test_flatten_own_files_then_subfolders() {
        let tree = scenario_tree();
        assert_eq!(ids(flatten_recursive(&tree)), vec![1, 2, 3]);
    }

    #[test]
    fn test_recursive_mode_sorts_by_date() {
        let tree = scenario_tree();
        assert_eq!(ids(visible_files(&tree, FolderMode::Recursive)), vec![2, 3, 1]);
    }

    #[test]
    fn test_single_mode_keeps_stored_order() {
        let tree = scenario_tree();
        assert_eq!(ids(visible_files(&tree, FolderMode::Single)), vec![1, 2]);
    }

    #[test]
    fn test_subfolders_visited_by_name() {
        let tree = folder(
            vec![],
            vec![
                ("zeta", folder(vec![gallery_file(30, 0)], vec![])),
                ("alpha", folder(vec![gallery_file(10, 0)], vec![])),
                (
                    "mid",
                    folder(
                        vec![gallery_file(20, 0)],
                        vec![("deep", folder(vec![gallery_file(21, 0)], vec![]))],
                    ),
                ),
            ],
        );

        assert_eq!(ids(flatten_recursive(&tree)), vec![10, 20, 21, 30]);
    }

    #[test]
    fn test_recursive_sort_is_stable() {
        let tree = folder(
            vec![gallery_file(1, 5), gallery_file(2, 1)],
            vec![
                ("a", folder(vec![gallery_file(3, 1), gallery_file(4, 5)], vec![])),
                ("b", folder(vec![gallery_file(5, 1)], vec![])),
            ],
        );

        assert_eq!(ids(visible_files(&tree, FolderMode::Recursive)), vec![2, 3, 5, 1, 4]);
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let tree = scenario_tree();
        assert_eq!(ids(flatten_recursive(&tree)), ids(flatten_recursive(&tree)));
    }

    #[test]
    fn test_flatten_empty_tree() {
        let tree = GalleryTree::default();
        assert!(flatten_recursive(&tree).is_empty());
        assert!(visible_files(&tree, FolderMode::Recursive).is_empty());
    }

    #[test]
    fn test_preview_sample_small_folder() {
        let tree = folder((1..=3).map(|id| gallery_file(id, 0)).collect(), vec![]);
        assert_eq!(preview_sample(&tree, 4), vec![1, 2, 3]);

        let tree = folder((1..=4).map(|id| gallery_file(id, 0)).collect(), vec![]);
        assert_eq!(preview_sample(&tree, 4), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_preview_sample_floor_spacing() {
        // ids equal their index, so the sample shows the chosen indices
        let tree = folder((0..10).map(|id| gallery_file(id, 0)).collect(), vec![]);
        assert_eq!(preview_sample(&tree, 4), vec![0, 2, 5, 7]);

        let tree = folder((0..5).map(|id| gallery_file(id, 0)).collect(), vec![]);
        assert_eq!(preview_sample(&tree, 4), vec![0, 1, 2, 3]);

        let tree = folder((0..7).map(|id| gallery_file(id, 0)).collect(), vec![]);
        assert_eq!(preview_sample(&tree, 4), vec![0, 1, 3, 5]);
    }

    #[test]
    fn test_preview_sample_length() {
        for len in 0..20 {
            let tree = folder((0..len).map(|id| gallery_file(id, 0)).collect(), vec![]);
            for count in 1..6 {
                let sample = preview_sample(&tree, count);
                assert_eq!(sample.len(), count.min(len as usize));
            }
        }
    }

    #[test]
    fn test_preview_ignores_subfolders() {
        let tree = folder(vec![], vec![("a", folder(vec![gallery_file(1, 0)], vec![]))]);
        assert!(preview_sample(&tree, 4).is_empty());
    }
}
