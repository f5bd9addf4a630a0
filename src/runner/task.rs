//! Task tree construction, queries, and plan resolution
//!
//! Tasks form a strict ownership tree stored in an arena: children are owned
//! index lists, the parent is a back-reference index, so ancestor walks and
//! descendant walks never touch an owning cycle.

use crate::config::{RawBody, RawTask};
use crate::error::{ConfigError, ConfigResult, ResolveError, ResolveResult};
use crate::runner::command::Command;
use crate::runner::plan::Plan;

/// Placeholder for forwarded CLI arguments inside shell code
pub const RUNARGS_PLACEHOLDER: &str = "$RUNARGS";

/// Help marker token
const HELP_MARKER: &str = "?";

/// Stable handle to a node in a [`TaskTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(usize);

/// Execution type of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Default leaf type, run synchronously in isolation
    Directive,
    /// Leaf whose captured output is bound into the environment
    Variable,
    /// Strictly ordered composite
    Sequence,
    /// Concurrent composite with unlabeled interleaved output
    Parallel,
    /// Concurrent composite with name-prefixed, colorized output
    Multiplex,
}

impl TaskKind {
    /// Whether this kind runs its commands concurrently
    pub fn is_concurrent(self) -> bool {
        matches!(self, TaskKind::Parallel | TaskKind::Multiplex)
    }

    /// Lowercase label, as used in plan explanations
    pub fn label(self) -> &'static str {
        match self {
            TaskKind::Directive => "directive",
            TaskKind::Variable => "variable",
            TaskKind::Sequence => "sequence",
            TaskKind::Parallel => "parallel",
            TaskKind::Multiplex => "multiplex",
        }
    }
}

/// A node in the task tree
#[derive(Debug)]
pub struct TaskNode {
    /// Task name with all sigils stripped
    pub name: String,

    /// Shell code; None once expanded into children
    pub code: Option<String>,

    /// Inferred execution type
    pub kind: TaskKind,

    /// Description text (root and top-level tasks only)
    pub desc: String,

    /// Skipped unless explicitly enabled with `+name`
    pub optional: bool,

    /// Suppresses launch/prepare/finish logging
    pub quiet: bool,

    /// Back-reference to the owning parent
    pub parent: Option<TaskId>,

    /// Owned children, in configuration order
    pub childs: Vec<TaskId>,
}

impl TaskNode {
    /// A task is composite iff it has children
    pub fn composite(&self) -> bool {
        !self.childs.is_empty()
    }

    /// Whether this node is the tree root
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Pick/enable/disable filter sets built from `=`, `+`, `-` argument tokens
#[derive(Debug, Default, Clone)]
pub struct Filters {
    pub pick: Vec<TaskId>,
    pub enable: Vec<TaskId>,
    pub disable: Vec<TaskId>,
}

/// A help view to render instead of executing
#[derive(Debug)]
pub struct HelpView {
    /// Task whose subtree is listed (the task itself at depth <= 1,
    /// otherwise its top-level ancestor)
    pub scope: TaskId,

    /// Task the user navigated to
    pub selected: TaskId,

    /// Built plan, absent for the bare root view
    pub plan: Option<Plan>,

    /// Extracted filters, absent for the bare root view
    pub filters: Option<Filters>,
}

/// Outcome of resolving a navigation argument vector
#[derive(Debug)]
pub enum Resolution {
    /// Render a help view and stop
    Help(HelpView),

    /// Execute the plan; `argv` holds the leftover tokens forwarded as
    /// `RUNARGS`
    Execute {
        plan: Plan,
        task: TaskId,
        argv: Vec<String>,
    },
}

/// The task tree built once per invocation from the loaded configuration
#[derive(Debug)]
pub struct TaskTree {
    nodes: Vec<TaskNode>,
}

impl TaskTree {
    /// Build a tree from the root descriptor
    pub fn build(root: &RawTask) -> ConfigResult<TaskTree> {
        let mut tree = TaskTree { nodes: Vec::new() };
        tree.add_node(root, None, TaskKind::Directive, false)?;
        Ok(tree)
    }

    /// The root task
    pub fn root(&self) -> TaskId {
        TaskId(0)
    }

    /// Access a node by id
    pub fn node(&self, id: TaskId) -> &TaskNode {
        &self.nodes[id.0]
    }

    fn add_node(
        &mut self,
        raw: &RawTask,
        parent: Option<TaskId>,
        parent_kind: TaskKind,
        mut quiet: bool,
    ) -> ConfigResult<TaskId> {
        let mut name = raw.name.clone();
        let mut desc = raw.desc.clone();

        // Optional
        let mut optional = false;
        if let Some(stripped) = name.strip_prefix('/') {
            name = stripped.to_string();
            optional = true;
        }

        // Quiet
        if let Some(position) = name.find('!') {
            name.remove(position);
            quiet = true;
        }

        let mut kind = TaskKind::Directive;
        let mut code = None;
        let mut group = None;

        match &raw.body {
            RawBody::Code(text) => {
                // All-uppercase leaf names bind their output by convention
                if !name.is_empty() && name == name.to_uppercase() {
                    kind = TaskKind::Variable;
                    desc = "Prints the variable".to_string();
                }
                code = Some(text.clone());
            }
            RawBody::Group(items) => {
                kind = TaskKind::Sequence;

                // Mode inheritance
                if parent_kind.is_concurrent() {
                    kind = parent_kind;
                }

                // Explicit concurrency grouping: (name) is parallel,
                // (|name) is multiplex; legal only at the first two levels
                if name.len() >= 2 && name.starts_with('(') && name.ends_with(')') {
                    let ancestors = parent.map(|p| self.parents(p).len() + 1).unwrap_or(0);
                    if ancestors >= 2 {
                        return Err(ConfigError::NestedControl);
                    }
                    let inner = &name[1..name.len() - 1];
                    match inner.strip_prefix('|') {
                        Some(rest) => {
                            name = rest.to_string();
                            kind = TaskKind::Multiplex;
                        }
                        None => {
                            name = inner.to_string();
                            kind = TaskKind::Parallel;
                        }
                    }
                }

                group = Some(items);
            }
        }

        let id = TaskId(self.nodes.len());
        self.nodes.push(TaskNode {
            name,
            code,
            kind,
            desc,
            optional,
            quiet,
            parent,
            childs: Vec::new(),
        });

        if let Some(items) = group {
            for item in items {
                let child = self.add_node(item, Some(id), kind, quiet)?;
                self.nodes[id.0].childs.push(child);
            }
        }

        Ok(id)
    }

    /// Ancestors of a task, root first
    pub fn parents(&self, id: TaskId) -> Vec<TaskId> {
        let mut parents = Vec::new();
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            parents.push(parent);
            current = self.node(parent).parent;
        }
        parents.reverse();
        parents
    }

    /// Space-joined non-empty names of the ancestor path plus the task
    pub fn qualified_name(&self, id: TaskId) -> String {
        let mut names = Vec::new();
        for task in self.parents(id).into_iter().chain([id]) {
            let name = &self.node(task).name;
            if !name.is_empty() {
                names.push(name.as_str());
            }
        }
        names.join(" ")
    }

    /// Variable tasks that lexically precede the path to this task, in
    /// root-to-immediate-parent order
    pub fn flatten_setup_tasks(&self, id: TaskId) -> Vec<TaskId> {
        let parents = self.parents(id);
        let mut tasks = Vec::new();
        for parent in &parents {
            for &task in &self.node(*parent).childs {
                if task == id || parents.contains(&task) {
                    break;
                }
                if self.node(task).kind == TaskKind::Variable {
                    tasks.push(task);
                }
            }
        }
        tasks
    }

    /// Leaf descendants of a composite task in tree order; a leaf yields
    /// itself
    pub fn flatten_general_tasks(&self, id: TaskId) -> Vec<TaskId> {
        if !self.node(id).composite() {
            return vec![id];
        }
        let mut tasks = Vec::new();
        for &child in &self.node(id).childs {
            if self.node(child).composite() {
                tasks.extend(self.flatten_general_tasks(child));
            } else {
                tasks.push(child);
            }
        }
        tasks
    }

    /// Depth-first pre-order traversal of descendants, composites included
    pub fn flatten_childs_with_composite(&self, id: TaskId) -> Vec<TaskId> {
        let mut tasks = Vec::new();
        for &child in &self.node(id).childs {
            tasks.push(child);
            if self.node(child).composite() {
                tasks.extend(self.flatten_childs_with_composite(child));
            }
        }
        tasks
    }

    /// Exact-name matches among the flattened general tasks
    pub fn find_child_tasks_by_name(&self, id: TaskId, name: &str) -> Vec<TaskId> {
        self.flatten_general_tasks(id)
            .into_iter()
            .filter(|&task| self.node(task).name == name)
            .collect()
    }

    /// Greedy abbreviation lookup: one character per tree level, first
    /// matching child wins
    pub fn find_child_task_by_abbreviation(
        &self,
        id: TaskId,
        abbreviation: &str,
    ) -> Option<TaskId> {
        let letter = abbreviation.chars().next()?;
        let rest = &abbreviation[letter.len_utf8()..];
        for &task in &self.node(id).childs {
            if self.node(task).name.starts_with(letter) {
                if rest.is_empty() {
                    return Some(task);
                }
                return self.find_child_task_by_abbreviation(task, rest);
            }
        }
        None
    }

    /// Resolve a navigation argument vector into a plan or a help view
    pub fn resolve(&self, id: TaskId, argv: &[String]) -> ResolveResult<Resolution> {
        let mut argv: Vec<String> = argv.to_vec();

        // Delegate by name
        if let Some(first) = argv.first() {
            for &task in &self.node(id).childs {
                if &self.node(task).name == first {
                    return self.resolve(task, &argv[1..]);
                }
            }
        }

        // Delegate by abbreviation
        if let Some(first) = argv.first() {
            if self.node(id).is_root() {
                if let Some(task) = self.find_child_task_by_abbreviation(id, first) {
                    return self.resolve(task, &argv[1..]);
                }
            }
        }

        // Root task
        if self.node(id).is_root() {
            if let Some(first) = argv.first() {
                if argv.len() > 1 || first != HELP_MARKER {
                    return Err(ResolveError::TaskNotFound(first.clone()));
                }
            }
            return Ok(Resolution::Help(HelpView {
                scope: id,
                selected: id,
                plan: None,
                filters: None,
            }));
        }

        // Prepare filters
        let filters = Filters {
            pick: self.extract_filter(id, &mut argv, '='),
            enable: self.extract_filter(id, &mut argv, '+'),
            disable: self.extract_filter(id, &mut argv, '-'),
        };

        // Detect help
        let mut help = false;
        if argv.len() == 1 && argv[0] == HELP_MARKER {
            argv.pop();
            help = true;
        }

        // Collect setup commands
        let mut commands = Vec::new();
        for task in self.flatten_setup_tasks(id) {
            let node = self.node(task);
            commands.push(Command::new(
                self.qualified_name(task),
                node.code.clone().unwrap_or_default(),
                Some(node.name.clone()),
            ));
        }

        // Collect general commands
        for task in self.flatten_general_tasks(id) {
            let node = self.node(task);
            if task != id && !filters.pick.contains(&task) {
                if node.optional && !filters.enable.contains(&task) {
                    continue;
                }
                if filters.disable.contains(&task) {
                    continue;
                }
                if !filters.pick.is_empty() {
                    continue;
                }
            }
            let variable = if node.kind == TaskKind::Variable {
                Some(node.name.clone())
            } else {
                None
            };
            commands.push(Command::new(
                self.qualified_name(task),
                node.code.clone().unwrap_or_default(),
                variable,
            ));
        }

        // Normalize arguments: the first non-variable command containing the
        // placeholder claims forwarded arguments, later occurrences are
        // stripped
        let mut arguments_index = None;
        for (index, command) in commands.iter_mut().enumerate() {
            if arguments_index.is_none()
                && !command.is_variable()
                && command.code.contains(RUNARGS_PLACEHOLDER)
            {
                arguments_index = Some(index);
                continue;
            }
            if arguments_index.is_some() {
                command.code = command.code.replace(RUNARGS_PLACEHOLDER, "");
            }
        }

        // Provide arguments
        if arguments_index.is_none() {
            for command in commands.iter_mut() {
                if !command.is_variable() {
                    command.code.push(' ');
                    command.code.push_str(RUNARGS_PLACEHOLDER);
                    break;
                }
            }
        }

        // Create plan
        let plan = Plan::new(commands, self.node(id).kind);

        // Show help
        if help {
            let parents = self.parents(id);
            let scope = if parents.len() < 2 { id } else { parents[1] };
            return Ok(Resolution::Help(HelpView {
                scope,
                selected: id,
                plan: Some(plan),
                filters: Some(filters),
            }));
        }

        Ok(Resolution::Execute {
            plan,
            task: id,
            argv,
        })
    }

    /// Consume `prefix`-marked tokens that name tasks, returning the matches
    fn extract_filter(&self, id: TaskId, argv: &mut Vec<String>, prefix: char) -> Vec<TaskId> {
        let mut tasks = Vec::new();
        let mut index = 0;
        while index < argv.len() {
            if let Some(name) = argv[index].strip_prefix(prefix) {
                let childs = self.find_child_tasks_by_name(id, name);
                if !childs.is_empty() {
                    tasks.extend(childs);
                    argv.remove(index);
                    continue;
                }
            }
            index += 1;
        }
        tasks
    }

    /// Shell-completion listing: immediate children names at the resolved
    /// navigation path
    pub fn complete(&self, id: TaskId, argv: &[String]) -> Vec<String> {
        if let Some(first) = argv.first() {
            for &task in &self.node(id).childs {
                if &self.node(task).name == first {
                    return self.complete(task, &argv[1..]);
                }
            }
        }
        self.node(id)
            .childs
            .iter()
            .map(|&task| self.node(task).name.clone())
            .filter(|name| !name.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RawBody, RawTask};

    fn leaf(name: &str, code: &str) -> RawTask {
        RawTask::new(name, RawBody::Code(code.to_string()))
    }

    fn group(name: &str, items: Vec<RawTask>) -> RawTask {
        RawTask::new(name, RawBody::Group(items))
    }

    fn root(items: Vec<RawTask>) -> RawTask {
        group("run", items)
    }

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn resolve_plan(tree: &TaskTree, tokens: &[&str]) -> Plan {
        match tree.resolve(tree.root(), &args(tokens)).unwrap() {
            Resolution::Execute { plan, .. } => plan,
            other => panic!("expected execute resolution, got {:?}", other),
        }
    }

    #[test]
    fn test_leaf_kind_from_casing() {
        let tree = TaskTree::build(&root(vec![
            leaf("BUILD_DIR", "echo out"),
            leaf("build", "echo building"),
        ]))
        .unwrap();

        let childs = &tree.node(tree.root()).childs;
        assert_eq!(tree.node(childs[0]).kind, TaskKind::Variable);
        assert_eq!(tree.node(childs[0]).desc, "Prints the variable");
        assert_eq!(tree.node(childs[1]).kind, TaskKind::Directive);
    }

    #[test]
    fn test_anonymous_leaves_are_directives() {
        let tree = TaskTree::build(&root(vec![group(
            "all",
            vec![leaf("", "echo one"), leaf("", "echo two")],
        )]))
        .unwrap();

        let all = tree.node(tree.root()).childs[0];
        for &child in &tree.node(all).childs {
            assert_eq!(tree.node(child).kind, TaskKind::Directive);
        }
    }

    #[test]
    fn test_sigil_stripping() {
        let tree = TaskTree::build(&root(vec![
            leaf("/clean", "rm -rf out"),
            leaf("lint!", "cargo clippy"),
            group("(par)", vec![leaf("", "echo a")]),
        ]))
        .unwrap();

        let childs = &tree.node(tree.root()).childs;
        let clean = tree.node(childs[0]);
        assert_eq!(clean.name, "clean");
        assert!(clean.optional);

        let lint = tree.node(childs[1]);
        assert_eq!(lint.name, "lint");
        assert!(lint.quiet);

        let par = tree.node(childs[2]);
        assert_eq!(par.name, "par");
        assert_eq!(par.kind, TaskKind::Parallel);
    }

    #[test]
    fn test_multiplex_marker() {
        let tree = TaskTree::build(&root(vec![group(
            "(|mux)",
            vec![leaf("a", "echo a"), leaf("b", "echo b")],
        )]))
        .unwrap();

        let mux = tree.node(tree.root()).childs[0];
        assert_eq!(tree.node(mux).name, "mux");
        assert_eq!(tree.node(mux).kind, TaskKind::Multiplex);
    }

    #[test]
    fn test_mode_inheritance() {
        let tree = TaskTree::build(&root(vec![group(
            "(par)",
            vec![group("inner", vec![leaf("", "echo a")])],
        )]))
        .unwrap();

        let par = tree.node(tree.root()).childs[0];
        let inner = tree.node(par).childs[0];
        assert_eq!(tree.node(inner).kind, TaskKind::Parallel);
    }

    #[test]
    fn test_quiet_inherited_by_descendants() {
        let tree = TaskTree::build(&root(vec![group(
            "grp!",
            vec![leaf("a", "echo a"), group("sub", vec![leaf("b", "echo b")])],
        )]))
        .unwrap();

        let grp = tree.node(tree.root()).childs[0];
        assert!(tree.node(grp).quiet);
        for task in tree.flatten_childs_with_composite(grp) {
            assert!(tree.node(task).quiet);
        }
    }

    #[test]
    fn test_nested_control_rejected() {
        let result = TaskTree::build(&root(vec![group(
            "outer",
            vec![group("(inner)", vec![leaf("", "echo a")])],
        )]));
        assert!(matches!(result, Err(ConfigError::NestedControl)));
    }

    #[test]
    fn test_qualified_name_skips_anonymous() {
        let tree = TaskTree::build(&root(vec![group(
            "grp",
            vec![leaf("", "echo a"), leaf("b", "echo b")],
        )]))
        .unwrap();

        let grp = tree.node(tree.root()).childs[0];
        let anon = tree.node(grp).childs[0];
        let named = tree.node(grp).childs[1];
        assert_eq!(tree.qualified_name(anon), "run grp");
        assert_eq!(tree.qualified_name(named), "run grp b");
    }

    #[test]
    fn test_flatten_setup_tasks() {
        let tree = TaskTree::build(&root(vec![
            leaf("BUILD_DIR", "echo out"),
            leaf("build", "echo building"),
            leaf("LATER", "echo later"),
        ]))
        .unwrap();

        let build = tree.node(tree.root()).childs[1];
        let setup = tree.flatten_setup_tasks(build);
        assert_eq!(setup.len(), 1);
        assert_eq!(tree.node(setup[0]).name, "BUILD_DIR");
    }

    #[test]
    fn test_flatten_general_tasks() {
        let tree = TaskTree::build(&root(vec![group(
            "all",
            vec![
                leaf("a", "echo a"),
                group("sub", vec![leaf("b", "echo b"), leaf("c", "echo c")]),
            ],
        )]))
        .unwrap();

        let all = tree.node(tree.root()).childs[0];
        let names: Vec<String> = tree
            .flatten_general_tasks(all)
            .into_iter()
            .map(|t| tree.node(t).name.clone())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);

        let a = tree.node(all).childs[0];
        assert_eq!(tree.flatten_general_tasks(a), vec![a]);
    }

    #[test]
    fn test_find_child_task_by_abbreviation() {
        let tree = TaskTree::build(&root(vec![
            leaf("build", "echo building"),
            group("test", vec![leaf("unit", "echo unit")]),
        ]))
        .unwrap();

        let found = tree
            .find_child_task_by_abbreviation(tree.root(), "tu")
            .unwrap();
        assert_eq!(tree.node(found).name, "unit");

        assert!(tree
            .find_child_task_by_abbreviation(tree.root(), "x")
            .is_none());
    }

    #[test]
    fn test_resolve_unknown_task() {
        let tree = TaskTree::build(&root(vec![leaf("build", "echo building")])).unwrap();
        let result = tree.resolve(tree.root(), &args(&["nope"]));
        assert!(matches!(result, Err(ResolveError::TaskNotFound(name)) if name == "nope"));
    }

    #[test]
    fn test_resolve_root_help() {
        let tree = TaskTree::build(&root(vec![leaf("build", "echo building")])).unwrap();
        match tree.resolve(tree.root(), &[]).unwrap() {
            Resolution::Help(view) => {
                assert_eq!(view.scope, tree.root());
                assert!(view.plan.is_none());
            }
            other => panic!("expected help resolution, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_appends_runargs() {
        let tree = TaskTree::build(&root(vec![leaf("build", "echo building")])).unwrap();
        let plan = resolve_plan(&tree, &["build"]);
        assert_eq!(plan.commands.len(), 1);
        assert_eq!(plan.commands[0].code, "echo building $RUNARGS");
    }

    #[test]
    fn test_resolve_single_placeholder_claim() {
        let tree = TaskTree::build(&root(vec![group(
            "all",
            vec![
                leaf("a", "echo a $RUNARGS"),
                leaf("b", "echo b $RUNARGS"),
            ],
        )]))
        .unwrap();

        let plan = resolve_plan(&tree, &["all"]);
        assert_eq!(plan.commands[0].code, "echo a $RUNARGS");
        assert_eq!(plan.commands[1].code, "echo b ");

        // Resolution is structurally idempotent
        let again = resolve_plan(&tree, &["all"]);
        assert_eq!(plan.commands, again.commands);
    }

    #[test]
    fn test_resolve_includes_setup_variables() {
        let tree = TaskTree::build(&root(vec![
            leaf("BUILD_DIR", "echo out"),
            leaf("build", "echo building in $BUILD_DIR"),
        ]))
        .unwrap();

        let plan = resolve_plan(&tree, &["build"]);
        assert_eq!(plan.commands.len(), 2);
        assert_eq!(plan.commands[0].variable.as_deref(), Some("BUILD_DIR"));
        assert_eq!(plan.commands[0].code, "echo out");
        assert!(plan.commands[1].variable.is_none());
    }

    #[test]
    fn test_resolve_pick_filter() {
        let tree = TaskTree::build(&root(vec![group(
            "grp",
            vec![
                leaf("a", "echo a"),
                leaf("b", "echo b"),
                leaf("c", "echo c"),
            ],
        )]))
        .unwrap();

        let plan = resolve_plan(&tree, &["grp", "=b"]);
        assert_eq!(plan.commands.len(), 1);
        assert_eq!(plan.commands[0].name, "run grp b");
    }

    #[test]
    fn test_resolve_optional_needs_enable() {
        let tree = TaskTree::build(&root(vec![group(
            "grp",
            vec![leaf("a", "echo a"), leaf("/opt", "echo opt")],
        )]))
        .unwrap();

        let plan = resolve_plan(&tree, &["grp"]);
        assert_eq!(plan.commands.len(), 1);

        let plan = resolve_plan(&tree, &["grp", "+opt"]);
        assert_eq!(plan.commands.len(), 2);
    }

    #[test]
    fn test_resolve_disable_filter() {
        let tree = TaskTree::build(&root(vec![group(
            "grp",
            vec![leaf("a", "echo a"), leaf("b", "echo b")],
        )]))
        .unwrap();

        let plan = resolve_plan(&tree, &["grp", "-b"]);
        assert_eq!(plan.commands.len(), 1);
        assert_eq!(plan.commands[0].name, "run grp a");
    }

    #[test]
    fn test_resolve_keeps_unmatched_tokens_as_arguments() {
        let tree = TaskTree::build(&root(vec![leaf("build", "echo building")])).unwrap();
        match tree
            .resolve(tree.root(), &args(&["build", "--release"]))
            .unwrap()
        {
            Resolution::Execute { argv, .. } => assert_eq!(argv, vec!["--release"]),
            other => panic!("expected execute resolution, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_help_scope() {
        let tree = TaskTree::build(&root(vec![group(
            "grp",
            vec![leaf("a", "echo a"), group("sub", vec![leaf("b", "echo b")])],
        )]))
        .unwrap();

        // Depth 1: the task itself is the scope
        match tree.resolve(tree.root(), &args(&["grp", "?"])).unwrap() {
            Resolution::Help(view) => {
                assert_eq!(tree.node(view.scope).name, "grp");
                assert!(view.plan.is_some());
            }
            other => panic!("expected help resolution, got {:?}", other),
        }

        // Depth 2: the top-level ancestor is the scope
        match tree
            .resolve(tree.root(), &args(&["grp", "sub", "?"]))
            .unwrap()
        {
            Resolution::Help(view) => {
                assert_eq!(tree.node(view.scope).name, "grp");
                assert_eq!(tree.node(view.selected).name, "sub");
            }
            other => panic!("expected help resolution, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_lists_children() {
        let tree = TaskTree::build(&root(vec![
            leaf("build", "echo building"),
            group("test", vec![leaf("unit", "echo unit"), leaf("", "echo anon")]),
        ]))
        .unwrap();

        assert_eq!(tree.complete(tree.root(), &[]), vec!["build", "test"]);
        assert_eq!(
            tree.complete(tree.root(), &args(&["test"])),
            vec!["unit"]
        );
    }
}
