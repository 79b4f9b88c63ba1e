//! In-memory virtual filesystem.
//!
//! Nodes live in a flat arena indexed by [`NodeId`]; directories hold
//! child indices and every non-root node holds its parent index, so the
//! parent back-reference is correct by construction. The filesystem also
//! owns the session cursor (the directory the user is "in"), mutated
//! only by [`Filesystem::change_directory`].
//!
//! # Path Convention
//!
//! - `~` is the root directory (the root node is literally named `~`)
//! - `~/a/b` is absolute (resolved from root)
//! - anything else is relative to the starting directory
//! - `..` at root is a no-op, matching `cd ..` at `/` in a real shell
//!
//! All queries are total: failures are reported as `None` or an error
//! sentinel string, never as a panic or error type. Callers format the
//! user-facing message (`ls: cannot access ...`, `cd: no such file ...`).

use crate::config::MAX_PATH_DEPTH;

/// Index of a node in the filesystem arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

/// Payload distinguishing files from directories.
#[derive(Clone, Debug)]
pub enum NodeKind {
    File { content: Option<String> },
    Directory { children: Vec<NodeId> },
}

/// A single file or directory.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    /// `None` only for the root directory.
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
}

/// Arena-backed directory tree plus the current-directory cursor.
#[derive(Clone, Debug)]
pub struct Filesystem {
    nodes: Vec<Node>,
    root: NodeId,
    current: NodeId,
}

impl Filesystem {
    /// Create a filesystem containing only the root directory `~`.
    pub fn new() -> Self {
        let root = Node {
            name: "~".to_string(),
            parent: None,
            kind: NodeKind::Directory { children: Vec::new() },
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            current: NodeId(0),
        }
    }

    /// Create the fixed seed tree the session starts with.
    ///
    /// ```text
    /// ~
    /// ├── documents/
    /// ├── projects/
    /// │   └── README.md
    /// └── .bashrc
    /// ```
    pub fn seeded() -> Self {
        let mut fs = Self::new();
        let root = fs.root;
        fs.add_dir(root, "documents");
        let projects = fs.add_dir(root, "projects");
        fs.add_file(projects, "README.md", Some("This is a project README."));
        fs.add_file(root, ".bashrc", Some("alias ll=\"ls -la\""));
        fs
    }

    /// Add a directory under `parent`, returning its id.
    pub fn add_dir(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.add_node(parent, name, NodeKind::Directory { children: Vec::new() })
    }

    /// Add a file under `parent`, returning its id.
    pub fn add_file(&mut self, parent: NodeId, name: &str, content: Option<&str>) -> NodeId {
        self.add_node(
            parent,
            name,
            NodeKind::File {
                content: content.map(str::to_string),
            },
        )
    }

    fn add_node(&mut self, parent: NodeId, name: &str, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.to_string(),
            parent: Some(parent),
            kind,
        });
        match &mut self.nodes[parent.0].kind {
            NodeKind::Directory { children } => children.push(id),
            NodeKind::File { .. } => unreachable!("files never own children"),
        }
        id
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    pub fn is_directory(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0].kind, NodeKind::Directory { .. })
    }

    /// File content, or `None` for directories or content-less files.
    pub fn content(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::File { content } => content.as_deref(),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Child names of a directory in insertion order (empty for files).
    pub fn child_names(&self, id: NodeId) -> Vec<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Directory { children } => {
                children.iter().map(|c| self.nodes[c.0].name.as_str()).collect()
            }
            NodeKind::File { .. } => Vec::new(),
        }
    }

    fn find_child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        match &self.nodes[dir.0].kind {
            NodeKind::Directory { children } => children
                .iter()
                .copied()
                .find(|c| self.nodes[c.0].name == name),
            NodeKind::File { .. } => None,
        }
    }

    // =========================================================================
    // Path Resolution
    // =========================================================================

    /// Resolve `path` starting from `from`.
    ///
    /// Walks segment by segment after splitting on `/` and discarding
    /// empty segments. `..` is absorbed silently at root; descending
    /// into a file fails immediately; a missing child name fails.
    pub fn resolve(&self, path: &str, from: NodeId) -> Option<NodeId> {
        if path == "~" {
            return Some(self.root);
        }
        if path == "." || path.is_empty() {
            return Some(from);
        }

        let (mut current, rest) = match path.strip_prefix("~/") {
            Some(rest) => (self.root, rest),
            None => (from, path),
        };

        for part in rest.split('/').filter(|s| !s.is_empty()) {
            if part == ".." {
                if current == self.root {
                    continue;
                }
                match &self.nodes[current.0] {
                    Node {
                        kind: NodeKind::Directory { .. },
                        parent: Some(parent),
                        ..
                    } => current = *parent,
                    _ => return None,
                }
                continue;
            }

            if !self.is_directory(current) {
                return None; // cannot navigate into a file
            }

            current = self.find_child(current, part)?;
        }

        Some(current)
    }

    /// Resolve `path` relative to the current directory.
    pub fn resolve_from_current(&self, path: &str) -> Option<NodeId> {
        self.resolve(path, self.current)
    }

    /// Change the current directory. Returns `false` (leaving the cursor
    /// unchanged) if the path does not resolve or resolves to a file.
    ///
    /// This is the only operation that mutates the session cursor.
    pub fn change_directory(&mut self, path: &str) -> bool {
        if path == "~" || path.is_empty() {
            self.current = self.root;
            return true;
        }

        if path == ".." {
            if self.current == self.root {
                return true; // already at root
            }
            match self.nodes[self.current.0].parent {
                Some(parent) => {
                    self.current = parent;
                    true
                }
                None => false,
            }
        } else {
            let target = match path.strip_prefix("~/") {
                Some(rest) => self.resolve(rest, self.root),
                None => self.resolve(path, self.current),
            };
            match target {
                Some(id) if self.is_directory(id) => {
                    self.current = id;
                    true
                }
                _ => false,
            }
        }
    }

    /// Reconstruct the absolute `~/...` path of whatever `path` resolves
    /// to from `from`.
    ///
    /// Failures return a distinguishable error sentinel rather than
    /// panicking; callers check for the marker. The parent-chain walk is
    /// bounded by [`MAX_PATH_DEPTH`] so a malformed chain terminates.
    pub fn absolute_path(&self, path: &str, from: NodeId) -> String {
        let Some(target) = self.resolve(path, from) else {
            return format!("/error/path/not/found/{}", path.replace('/', "_"));
        };

        if target == self.root {
            return "~".to_string();
        }

        let mut parts: Vec<&str> = Vec::new();
        let mut node = target;
        let mut depth = 0;

        while node != self.root && depth < MAX_PATH_DEPTH {
            parts.push(&self.nodes[node.0].name);
            match self.nodes[node.0].parent {
                Some(parent) => node = parent,
                None => break,
            }
            depth += 1;
        }

        // A walk that consumes the whole budget is treated as malformed
        // even if it landed on root.
        if node != self.root || depth >= MAX_PATH_DEPTH {
            return "/error/path/could/not/be/traced/to/root".to_string();
        }

        parts.reverse();
        format!("~/{}", parts.join("/"))
    }
}

impl Default for Filesystem {
    fn default() -> Self {
        Self::seeded()
    }
}
