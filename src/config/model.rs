use std::collections::VecDeque;

use serde::Deserialize;
use serde_json::Value;

use crate::config::ValidationError;
use crate::variables::ExtractorKind;

/// Platform substitution table attached to a package-style leaf.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AliasRule {
    pub aliases: Vec<String>,
    pub platforms: Vec<String>,
}

/// `aliases:` accepts either a single string or a list of strings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
enum Aliases {
    One(String),
    Many(Vec<String>),
}

impl Aliases {
    fn into_vec(self) -> Vec<String> {
        match self {
            Aliases::One(alias) => vec![alias],
            Aliases::Many(aliases) => aliases,
        }
    }
}

/// Raw shape of one `commands` entry, as written in YAML.
#[derive(Debug, Deserialize)]
struct CommandEntry {
    name: String,
    aliases: Option<Aliases>,
    result: Option<Value>,
    commands: Option<Vec<CommandEntry>>,
    package_aliases: Option<Vec<AliasRule>>,
    variables: Option<ExtractorKind>,
}

#[derive(Debug, Deserialize)]
struct GrammarDocument {
    commands: Vec<CommandEntry>,
}

/// Validated, typed command grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    pub commands: Vec<CommandNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandNode {
    pub name: String,
    pub aliases: Vec<String>,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Resolvable command carrying a result payload.
    Leaf(Leaf),
    /// Command group that needs a further token to resolve.
    Group(Vec<CommandNode>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub result: Value,
    pub package_aliases: Vec<AliasRule>,
    pub extractor: Option<ExtractorKind>,
}

impl CommandNode {
    /// Exact, case-sensitive comparison against the name and every alias.
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.aliases.iter().any(|alias| alias == token)
    }
}

impl Grammar {
    /// Validate a parsed grammar document and build the typed tree from it.
    ///
    /// Extractors are resolved here: a node's `variables:` applies to its
    /// whole subtree, and a root without one falls back to
    /// [`ExtractorKind::for_command`] on its name.
    pub fn from_document(document: &Value) -> Result<Grammar, ValidationError> {
        validate(document)?;

        let raw: GrammarDocument = serde_json::from_value(document.clone())
            .map_err(|e| ValidationError::Schema(e.to_string()))?;

        let commands = raw
            .commands
            .into_iter()
            .map(|entry| {
                let inherited = ExtractorKind::for_command(&entry.name);
                build_node(entry, &[], inherited)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Grammar { commands })
    }
}

fn build_node(
    entry: CommandEntry,
    ancestors: &[String],
    inherited: Option<ExtractorKind>,
) -> Result<CommandNode, ValidationError> {
    let mut path = ancestors.to_vec();
    path.push(entry.name.clone());
    let extractor = entry.variables.or(inherited);

    let kind = match (entry.result.filter(is_present), entry.commands) {
        (Some(result), None) => NodeKind::Leaf(Leaf {
            result,
            package_aliases: entry.package_aliases.unwrap_or_default(),
            extractor,
        }),
        (None, Some(children)) => NodeKind::Group(
            children
                .into_iter()
                .map(|child| build_node(child, &path, extractor))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        // Shapes `validate` already rejects.
        _ => {
            return Err(ValidationError::Schema(format!(
                "`{}` is neither a leaf nor a command group",
                path.join(" ")
            )));
        }
    };

    Ok(CommandNode {
        name: entry.name,
        aliases: entry.aliases.map(Aliases::into_vec).unwrap_or_default(),
        kind,
    })
}

/// Check the structure of a grammar document without building it.
///
/// Nodes are visited breadth first and the first violation is returned.
/// A `null` value counts as an absent property.
pub fn validate(document: &Value) -> Result<(), ValidationError> {
    let commands = document
        .get("commands")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingCommands)?;

    let mut queue: VecDeque<(Vec<String>, &Value)> =
        commands.iter().map(|command| (Vec::new(), command)).collect();

    while let Some((mut path, command)) = queue.pop_front() {
        let name = command
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingName)?;
        path.push(name.to_string());

        match (property(command, "result"), property(command, "commands")) {
            (Some(_), Some(_)) => return Err(ValidationError::ResultAndCommands { path }),
            (Some(_), None) => {}
            (None, Some(children)) => {
                let Some(children) = children.as_array() else {
                    return Err(ValidationError::CommandsNotList { path });
                };
                queue.extend(children.iter().map(|child| (path.clone(), child)));
            }
            (None, None) => return Err(ValidationError::NoResultOrCommands { path }),
        }
    }

    Ok(())
}

fn property<'a>(command: &'a Value, key: &str) -> Option<&'a Value> {
    command.get(key).filter(|value| is_present(value))
}

/// `null`, `false`, zero and the empty string count as absent. Empty lists
/// and mappings are present.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
