// Composite: files and directories share one interface, so a whole tree
// can be sized and printed the same way a single file is.

use crate::transcript::Transcript;

pub trait FileSystemComponent {
    fn name(&self) -> &str;

    /// Size in KB. A directory reports the sum of everything below it.
    fn size(&self) -> u64;

    fn print(&self, indent: &str) -> Vec<String>;
}

#[derive(Debug, Clone)]
pub struct File {
    name: String,
    size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl FileSystemComponent for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn print(&self, indent: &str) -> Vec<String> {
        vec![format!("{indent}- File: {} ({} KB)", self.name, self.size)]
    }
}

pub struct Directory {
    name: String,
    children: Vec<Box<dyn FileSystemComponent>>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, component: impl FileSystemComponent + 'static) {
        self.children.push(Box::new(component));
    }

    /// Detaches the first direct child called `name`.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn FileSystemComponent>> {
        let index = self.children.iter().position(|c| c.name() == name)?;
        Some(self.children.remove(index))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl FileSystemComponent for Directory {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.children.iter().map(|c| c.size()).sum()
    }

    fn print(&self, indent: &str) -> Vec<String> {
        let child_indent = format!("{indent}  ");
        let mut lines = vec![format!("{indent}+ Directory: {}", self.name)];
        for child in &self.children {
            lines.extend(child.print(&child_indent));
        }
        lines
    }
}

pub fn demo() -> Transcript {
    let mut directory1 = Directory::new("Directory1");
    directory1.add(File::new("File1.txt", 100));
    directory1.add(File::new("File2.txt", 200));

    let mut directory2 = Directory::new("Directory2");
    directory2.add(File::new("File3.txt", 300));

    let mut root = Directory::new("RootDirectory");
    root.add(directory1);
    root.add(directory2);

    let mut out = Transcript::new();
    out.push("File system structure:");
    out.extend(root.print(""));
    out.push(format!("Total size: {} KB", root.size()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_remove_child() {
        let mut dir = Directory::new("docs");
        dir.add(File::new("a.txt", 10));
        dir.add(File::new("b.txt", 20));

        let removed = dir.remove("a.txt").unwrap();
        assert_eq!(removed.name(), "a.txt");
        assert_eq!(dir.size(), 20);
        assert!(dir.remove("a.txt").is_none());
    }

    #[test]
    fn test_empty_directory_has_zero_size() {
        let dir = Directory::new("empty");
        assert!(dir.is_empty());
        assert_eq!(dir.size(), 0);
        assert_eq!(dir.print("  "), ["  + Directory: empty"]);
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(
            demo().lines(),
            [
                "File system structure:",
                "+ Directory: RootDirectory",
                "  + Directory: Directory1",
                "    - File: File1.txt (100 KB)",
                "    - File: File2.txt (200 KB)",
                "  + Directory: Directory2",
                "    - File: File3.txt (300 KB)",
                "Total size: 600 KB",
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_directory_size_is_sum_of_leaves(
            groups in prop::collection::vec(prop::collection::vec(0u64..10_000, 0..8), 0..6)
        ) {
            let mut root = Directory::new("root");
            let mut expected = 0;
            for (i, sizes) in groups.iter().enumerate() {
                let mut dir = Directory::new(format!("dir{i}"));
                for (j, size) in sizes.iter().enumerate() {
                    dir.add(File::new(format!("f{j}"), *size));
                    expected += size;
                }
                root.add(dir);
            }
            prop_assert_eq!(root.size(), expected);
        }
    }
}
