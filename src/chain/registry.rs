//! The enumerated operation registry backing [`Chain`](crate::chain::Chain).
//!
//! Every chainable operation is listed here explicitly, mapped to an
//! adapter that coerces the recorded [`ChainArg`]s and delegates to the
//! ordinary module function. There is no reflective dispatch: an
//! operation chains only if someone registered it.
//!
//! Lookup is case-sensitive and tries the name as given, then the
//! trailing-underscore variant, so `chain.call("map", ...)` reaches the
//! function published as `map_`.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::array;
use crate::collection;
use crate::error::ArgumentError;
use crate::iteratee::Iteratee;
use crate::number;
use crate::object;
use crate::predicate;
use crate::string;
use crate::value::Value;

use super::error::ChainError;

/// An argument recorded on a chain step.
///
/// Most arguments are plain [`Value`]s; iteratee-taking operations also
/// accept a prepared [`Iteratee`] (a `Value` argument is coerced through
/// the standard iteratee table instead).
#[derive(Debug, Clone)]
pub enum ChainArg {
    /// A plain value argument.
    Value(Value),
    /// A prepared iteratee for callback positions.
    Iteratee(Iteratee),
}

impl ChainArg {
    /// The argument as a plain value.
    fn expect_value(&self, operation: &'static str) -> Result<&Value, ChainError> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Iteratee(_) => Err(argument(
                operation,
                "expected a value argument, found an iteratee",
            )),
        }
    }

    /// The argument as an iteratee, coercing values through the
    /// standard table.
    fn to_iteratee(&self) -> Iteratee {
        match self {
            Self::Value(value) => Iteratee::from_value(value),
            Self::Iteratee(iteratee) => iteratee.clone(),
        }
    }

    fn expect_index(&self, operation: &'static str) -> Result<usize, ChainError> {
        self.expect_value(operation)?
            .as_int()
            .and_then(|index| usize::try_from(index).ok())
            .ok_or_else(|| argument(operation, "expected a non-negative integer argument"))
    }

    fn expect_text(&self, operation: &'static str) -> Result<&str, ChainError> {
        self.expect_value(operation)?
            .as_str()
            .ok_or_else(|| argument(operation, "expected a string argument"))
    }

    fn expect_number(&self, operation: &'static str) -> Result<f64, ChainError> {
        self.expect_value(operation)?
            .as_number()
            .ok_or_else(|| argument(operation, "expected a numeric argument"))
    }
}

impl From<Value> for ChainArg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Iteratee> for ChainArg {
    fn from(iteratee: Iteratee) -> Self {
        Self::Iteratee(iteratee)
    }
}

impl From<i64> for ChainArg {
    fn from(value: i64) -> Self {
        Self::Value(Value::Int(value))
    }
}

impl From<f64> for ChainArg {
    fn from(value: f64) -> Self {
        Self::Value(Value::Float(value))
    }
}

impl From<bool> for ChainArg {
    fn from(value: bool) -> Self {
        Self::Value(Value::Bool(value))
    }
}

impl From<&str> for ChainArg {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

/// An adapter from the chain calling convention onto a module function.
pub(crate) type Adapter = fn(Value, &[ChainArg]) -> Result<Value, ChainError>;

/// Resolves an operation name, trying the trailing-underscore alias.
pub(crate) fn lookup(name: &str) -> Option<Adapter> {
    REGISTRY.get(name).copied().or_else(|| {
        let aliased = format!("{name}_");
        REGISTRY.get(aliased.as_str()).copied()
    })
}

static REGISTRY: LazyLock<HashMap<&'static str, Adapter>> = LazyLock::new(|| {
    let mut table: HashMap<&'static str, Adapter> = HashMap::new();
    register_object(&mut table);
    register_array(&mut table);
    register_collection(&mut table);
    register_predicate(&mut table);
    register_string(&mut table);
    register_number(&mut table);
    table
});

fn argument(operation: &'static str, message: impl Into<String>) -> ChainError {
    ArgumentError {
        operation,
        message: message.into(),
    }
    .into()
}

fn arg<'a>(
    args: &'a [ChainArg],
    position: usize,
    operation: &'static str,
) -> Result<&'a ChainArg, ChainError> {
    args.get(position)
        .ok_or_else(|| argument(operation, format!("missing argument {position}")))
}

/// The iteratee at `position`, defaulting to identity when absent.
fn iteratee_at(args: &[ChainArg], position: usize) -> Iteratee {
    args.get(position).map_or_else(Iteratee::default, ChainArg::to_iteratee)
}

fn seq_input<'a>(input: &'a Value, operation: &'static str) -> Result<&'a [Value], ChainError> {
    input
        .as_seq()
        .map(Vec::as_slice)
        .ok_or_else(|| argument(operation, "expected a sequence input"))
}

fn str_input<'a>(input: &'a Value, operation: &'static str) -> Result<&'a str, ChainError> {
    input
        .as_str()
        .ok_or_else(|| argument(operation, "expected a string input"))
}

fn number_input(input: &Value, operation: &'static str) -> Result<f64, ChainError> {
    input
        .as_number()
        .ok_or_else(|| argument(operation, "expected a numeric input"))
}

/// Key-list arguments accept a single string or a sequence of strings.
fn text_list(args: &[ChainArg], position: usize, operation: &'static str) -> Result<Vec<String>, ChainError> {
    match arg(args, position, operation)?.expect_value(operation)? {
        Value::Str(text) => Ok(vec![text.clone()]),
        Value::Seq(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| argument(operation, "expected string keys"))
            })
            .collect(),
        _ => Err(argument(operation, "expected a string or sequence of strings")),
    }
}

fn optional_float(result: Option<f64>) -> Value {
    result.map_or(Value::Null, Value::Float)
}

fn optional_value(result: Option<Value>) -> Value {
    result.unwrap_or(Value::Null)
}

fn float_items(input: &Value, operation: &'static str) -> Result<Vec<f64>, ChainError> {
    Ok(seq_input(input, operation)?
        .iter()
        .filter_map(Value::as_number)
        .collect())
}

fn register_object(table: &mut HashMap<&'static str, Adapter>) {
    table.insert("get", |input, args| {
        let path = arg(args, 0, "get")?.expect_text("get")?;
        let fallback = args.get(1);
        let found = object::get(&input, path).cloned();
        Ok(match (found, fallback) {
            (Some(value), _) => value,
            (None, Some(default)) => default.expect_value("get")?.clone(),
            (None, None) => Value::Null,
        })
    });
    table.insert("has", |input, args| {
        let path = arg(args, 0, "has")?.expect_text("has")?;
        Ok(Value::Bool(object::has(&input, path)))
    });
    table.insert("set", |mut input, args| {
        let path = arg(args, 0, "set")?.expect_text("set")?.to_string();
        let value = arg(args, 1, "set")?.expect_value("set")?.clone();
        object::set(&mut input, path.as_str(), value);
        Ok(input)
    });
    table.insert("merge", |mut input, args| {
        let sources = collect_values(args, "merge")?;
        object::merge(&mut input, &sources);
        Ok(input)
    });
    table.insert("defaults", |mut input, args| {
        let sources = collect_values(args, "defaults")?;
        object::defaults(&mut input, &sources);
        Ok(input)
    });
    table.insert("defaults_deep", |mut input, args| {
        let sources = collect_values(args, "defaults_deep")?;
        object::defaults_deep(&mut input, &sources);
        Ok(input)
    });
    table.insert("clone_deep", |input, _| Ok(object::clone_deep(&input)));
    table.insert("invert", |input, _| Ok(object::invert(&input)));
    table.insert("pick", |input, args| {
        let keys = text_list(args, 0, "pick")?;
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        Ok(object::pick(&input, &refs))
    });
    table.insert("omit", |input, args| {
        let keys = text_list(args, 0, "omit")?;
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        Ok(object::omit(&input, &refs))
    });
    table.insert("map_values", |input, args| {
        let iteratee = iteratee_at(args, 0);
        Ok(object::map_values(&input, |value, _| {
            iteratee.apply_value(value)
        }))
    });
    table.insert("map_keys", |input, args| {
        let iteratee = iteratee_at(args, 0);
        Ok(object::map_keys(&input, |value, _| {
            iteratee.apply_value(value).to_string()
        }))
    });
    table.insert("find_key", |input, args| {
        let predicate = iteratee_at(args, 0);
        Ok(object::find_key(&input, |value, _| {
            predicate::truthy(&predicate.apply_value(value))
        })
        .map_or(Value::Null, Value::from))
    });
    table.insert("find_last_key", |input, args| {
        let predicate = iteratee_at(args, 0);
        Ok(object::find_last_key(&input, |value, _| {
            predicate::truthy(&predicate.apply_value(value))
        })
        .map_or(Value::Null, Value::from))
    });
}

fn collect_values(args: &[ChainArg], operation: &'static str) -> Result<Vec<Value>, ChainError> {
    args.iter()
        .map(|step_arg| step_arg.expect_value(operation).cloned())
        .collect()
}

fn register_array(table: &mut HashMap<&'static str, Adapter>) {
    table.insert("head", |input, _| {
        Ok(optional_value(array::head(seq_input(&input, "head")?).cloned()))
    });
    table.insert("last", |input, _| {
        Ok(optional_value(array::last(seq_input(&input, "last")?).cloned()))
    });
    table.insert("initial", |input, _| {
        Ok(Value::Seq(array::initial(seq_input(&input, "initial")?)))
    });
    table.insert("tail", |input, _| {
        Ok(Value::Seq(array::tail(seq_input(&input, "tail")?)))
    });
    table.insert("take", |input, args| {
        let count = arg(args, 0, "take")?.expect_index("take")?;
        Ok(Value::Seq(array::take(seq_input(&input, "take")?, count)))
    });
    table.insert("take_right", |input, args| {
        let count = arg(args, 0, "take_right")?.expect_index("take_right")?;
        Ok(Value::Seq(array::take_right(
            seq_input(&input, "take_right")?,
            count,
        )))
    });
    table.insert("drop", |input, args| {
        let count = arg(args, 0, "drop")?.expect_index("drop")?;
        Ok(Value::Seq(array::drop_items(
            seq_input(&input, "drop")?,
            count,
        )))
    });
    table.insert("drop_right", |input, args| {
        let count = arg(args, 0, "drop_right")?.expect_index("drop_right")?;
        Ok(Value::Seq(array::drop_right(
            seq_input(&input, "drop_right")?,
            count,
        )))
    });
    table.insert("slice", |input, args| {
        let start = arg(args, 0, "slice")?.expect_index("slice")?;
        let end = arg(args, 1, "slice")?.expect_index("slice")?;
        Ok(Value::Seq(array::slice(
            seq_input(&input, "slice")?,
            start,
            end,
        )))
    });
    table.insert("chunk", |input, args| {
        let size = arg(args, 0, "chunk")?.expect_index("chunk")?;
        let chunks = array::chunk(seq_input(&input, "chunk")?, size);
        Ok(Value::Seq(chunks.into_iter().map(Value::Seq).collect()))
    });
    table.insert("compact", |input, _| {
        Ok(Value::Seq(array::compact(seq_input(&input, "compact")?)))
    });
    table.insert("flatten", |input, _| {
        Ok(Value::Seq(array::flatten(seq_input(&input, "flatten")?)))
    });
    table.insert("flatten_deep", |input, _| {
        Ok(Value::Seq(array::flatten_deep(seq_input(
            &input,
            "flatten_deep",
        )?)))
    });
    table.insert("uniq", |input, _| {
        Ok(Value::Seq(array::uniq(seq_input(&input, "uniq")?)))
    });
    table.insert("uniq_by", |input, args| {
        let iteratee = iteratee_at(args, 0);
        Ok(Value::Seq(array::uniq_by(
            seq_input(&input, "uniq_by")?,
            &iteratee,
        )))
    });
    table.insert("duplicates", |input, _| {
        Ok(Value::Seq(array::duplicates(seq_input(
            &input,
            "duplicates",
        )?)))
    });
    table.insert("duplicates_by", |input, args| {
        let iteratee = iteratee_at(args, 0);
        Ok(Value::Seq(array::duplicates_by(
            seq_input(&input, "duplicates_by")?,
            &iteratee,
        )))
    });
    table.insert("difference", |input, args| {
        let other = other_list(args, "difference")?;
        Ok(Value::Seq(array::difference(
            seq_input(&input, "difference")?,
            &[&other],
        )))
    });
    table.insert("union", |input, args| {
        let other = other_list(args, "union")?;
        Ok(Value::Seq(array::union(&[
            seq_input(&input, "union")?,
            &other,
        ])))
    });
    table.insert("intersection", |input, args| {
        let other = other_list(args, "intersection")?;
        Ok(Value::Seq(array::intersection(
            seq_input(&input, "intersection")?,
            &[&other],
        )))
    });
    table.insert("xor", |input, args| {
        let other = other_list(args, "xor")?;
        Ok(Value::Seq(array::xor(&[
            seq_input(&input, "xor")?,
            &other,
        ])))
    });
    table.insert("zip", |input, args| {
        let other = other_list(args, "zip")?;
        Ok(Value::Seq(array::zip_lists(&[
            seq_input(&input, "zip")?,
            &other,
        ])))
    });
    table.insert("unzip", |input, _| {
        Ok(Value::Seq(array::unzip(seq_input(&input, "unzip")?)))
    });
    table.insert("unzip_object", |input, _| {
        let entries = input
            .as_map()
            .ok_or_else(|| argument("unzip_object", "expected a mapping input"))?;
        let (keys, values) = array::unzip_object(entries);
        Ok(Value::Seq(vec![
            Value::Seq(keys.into_iter().map(Value::from).collect()),
            Value::Seq(values),
        ]))
    });
    table.insert("zip_object", |input, args| {
        let keys: Vec<String> = seq_input(&input, "zip_object")?
            .iter()
            .map(|key| {
                key.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| argument("zip_object", "expected string keys"))
            })
            .collect::<Result<_, _>>()?;
        let values = other_list(args, "zip_object")?;
        Ok(Value::Map(array::zip_object(&keys, &values)))
    });
    table.insert("from_pairs", |input, _| {
        Ok(Value::Map(array::from_pairs(seq_input(
            &input,
            "from_pairs",
        )?)))
    });
    table.insert("sorted_index", |input, args| {
        let value = arg(args, 0, "sorted_index")?.expect_value("sorted_index")?;
        let position = array::sorted_index(seq_input(&input, "sorted_index")?, value);
        Ok(int_value(position))
    });
    table.insert("sorted_index_by", |input, args| {
        let value = arg(args, 0, "sorted_index_by")?
            .expect_value("sorted_index_by")?
            .clone();
        let iteratee = iteratee_at(args, 1);
        let position =
            array::sorted_index_by(seq_input(&input, "sorted_index_by")?, &value, &iteratee);
        Ok(int_value(position))
    });
    table.insert("index_of", |input, args| {
        let value = arg(args, 0, "index_of")?.expect_value("index_of")?;
        Ok(found_index(array::index_of(
            seq_input(&input, "index_of")?,
            value,
        )))
    });
    table.insert("last_index_of", |input, args| {
        let value = arg(args, 0, "last_index_of")?.expect_value("last_index_of")?;
        Ok(found_index(array::last_index_of(
            seq_input(&input, "last_index_of")?,
            value,
        )))
    });
    table.insert("push", |input, args| {
        let value = arg(args, 0, "push")?.expect_value("push")?.clone();
        let mut items = seq_input(&input, "push")?.to_vec();
        array::push(&mut items, value);
        Ok(Value::Seq(items))
    });
    table.insert("fill", |input, args| {
        let value = arg(args, 0, "fill")?.expect_value("fill")?.clone();
        let start = arg(args, 1, "fill")?.expect_index("fill")?;
        let end = arg(args, 2, "fill")?.expect_index("fill")?;
        let mut items = seq_input(&input, "fill")?.to_vec();
        array::fill(&mut items, &value, start, end);
        Ok(Value::Seq(items))
    });
    table.insert("splice", |input, args| {
        let start = arg(args, 0, "splice")?.expect_index("splice")?;
        let delete_count = arg(args, 1, "splice")?.expect_index("splice")?;
        let insertions = match args.get(2) {
            Some(step_arg) => match step_arg.expect_value("splice")? {
                Value::Seq(items) => items.clone(),
                other => vec![other.clone()],
            },
            None => Vec::new(),
        };
        let mut items = seq_input(&input, "splice")?.to_vec();
        array::splice(&mut items, start, delete_count, insertions);
        Ok(Value::Seq(items))
    });
    table.insert("pull", |input, args| {
        let unwanted = other_list(args, "pull")?;
        let mut items = seq_input(&input, "pull")?.to_vec();
        array::pull(&mut items, &unwanted);
        Ok(Value::Seq(items))
    });
    table.insert("remove", |input, args| {
        let predicate = iteratee_at(args, 0);
        let mut items = seq_input(&input, "remove")?.to_vec();
        array::remove_where(&mut items, &predicate);
        Ok(Value::Seq(items))
    });
}

/// A sequence argument at position 0; a bare value argument is treated
/// as a one-element list.
fn other_list(args: &[ChainArg], operation: &'static str) -> Result<Vec<Value>, ChainError> {
    match arg(args, 0, operation)?.expect_value(operation)? {
        Value::Seq(items) => Ok(items.clone()),
        other => Ok(vec![other.clone()]),
    }
}

fn found_index(position: Option<usize>) -> Value {
    position.map_or(Value::Int(-1), int_value)
}

fn int_value(count: usize) -> Value {
    Value::Int(i64::try_from(count).unwrap_or(i64::MAX))
}

fn register_collection(table: &mut HashMap<&'static str, Adapter>) {
    table.insert("map_", |input, args| {
        Ok(Value::Seq(collection::map_(&input, &iteratee_at(args, 0))))
    });
    table.insert("filter_", |input, args| {
        Ok(Value::Seq(collection::filter_(
            &input,
            &iteratee_at(args, 0),
        )))
    });
    table.insert("reject", |input, args| {
        Ok(Value::Seq(collection::reject(&input, &iteratee_at(args, 0))))
    });
    table.insert("find_", |input, args| {
        Ok(optional_value(collection::find_(
            &input,
            &iteratee_at(args, 0),
        )))
    });
    table.insert("find_last", |input, args| {
        Ok(optional_value(collection::find_last(
            &input,
            &iteratee_at(args, 0),
        )))
    });
    table.insert("every", |input, args| {
        Ok(Value::Bool(collection::every(&input, &iteratee_at(args, 0))))
    });
    table.insert("some", |input, args| {
        Ok(Value::Bool(collection::some(&input, &iteratee_at(args, 0))))
    });
    table.insert("group_by", |input, args| {
        Ok(Value::Map(collection::group_by(
            &input,
            &iteratee_at(args, 0),
        )))
    });
    table.insert("count_by", |input, args| {
        Ok(Value::Map(collection::count_by(
            &input,
            &iteratee_at(args, 0),
        )))
    });
    table.insert("key_by", |input, args| {
        Ok(Value::Map(collection::key_by(&input, &iteratee_at(args, 0))))
    });
    table.insert("partition", |input, args| {
        let (accepted, rejected) = collection::partition(&input, &iteratee_at(args, 0));
        Ok(Value::Seq(vec![
            Value::Seq(accepted),
            Value::Seq(rejected),
        ]))
    });
    table.insert("size_", |input, _| Ok(int_value(collection::size_(&input))));
    table.insert("includes", |input, args| {
        let target = arg(args, 0, "includes")?.expect_value("includes")?;
        Ok(Value::Bool(collection::includes(&input, target)))
    });
    table.insert("pluck", |input, args| {
        let path = arg(args, 0, "pluck")?.expect_text("pluck")?;
        Ok(Value::Seq(collection::pluck(&input, path)))
    });
    table.insert("flat_map_", |input, args| {
        Ok(Value::Seq(collection::flat_map_(
            &input,
            &iteratee_at(args, 0),
        )))
    });
    table.insert("min_by", |input, args| {
        Ok(optional_value(collection::min_by(
            &input,
            &iteratee_at(args, 0),
        )))
    });
    table.insert("max_by", |input, args| {
        Ok(optional_value(collection::max_by(
            &input,
            &iteratee_at(args, 0),
        )))
    });
    table.insert("sum_by", |input, args| {
        Ok(Value::Float(collection::sum_by(
            &input,
            &iteratee_at(args, 0),
        )))
    });
    table.insert("mean_by", |input, args| {
        Ok(optional_float(collection::mean_by(
            &input,
            &iteratee_at(args, 0),
        )))
    });
    table.insert("sort_by", |input, args| {
        let keys = text_list(args, 0, "sort_by")?;
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        Ok(Value::Seq(collection::sort_by(
            seq_input(&input, "sort_by")?,
            &refs,
        )))
    });
    table.insert("order_by", |input, args| {
        let keys = text_list(args, 0, "order_by")?;
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        Ok(Value::Seq(collection::order_by(
            seq_input(&input, "order_by")?,
            &refs,
        )))
    });
}

fn register_predicate(table: &mut HashMap<&'static str, Adapter>) {
    table.insert("is_empty", |input, _| {
        Ok(Value::Bool(predicate::is_empty(&input)))
    });
    table.insert("is_equal", |input, args| {
        let other = arg(args, 0, "is_equal")?.expect_value("is_equal")?;
        Ok(Value::Bool(predicate::is_equal(&input, other)))
    });
    table.insert("is_match", |input, args| {
        let source = arg(args, 0, "is_match")?.expect_value("is_match")?;
        Ok(Value::Bool(predicate::is_match(&input, source)))
    });
    table.insert("truthy", |input, _| Ok(Value::Bool(predicate::truthy(&input))));
    table.insert("is_null", |input, _| Ok(Value::Bool(predicate::is_null(&input))));
    table.insert("is_number", |input, _| {
        Ok(Value::Bool(predicate::is_number(&input)))
    });
    table.insert("is_integer", |input, _| {
        Ok(Value::Bool(predicate::is_integer(&input)))
    });
    table.insert("is_float", |input, _| {
        Ok(Value::Bool(predicate::is_float(&input)))
    });
    table.insert("is_boolean", |input, _| {
        Ok(Value::Bool(predicate::is_boolean(&input)))
    });
    table.insert("is_string", |input, _| {
        Ok(Value::Bool(predicate::is_string(&input)))
    });
    table.insert("is_sequence", |input, _| {
        Ok(Value::Bool(predicate::is_sequence(&input)))
    });
    table.insert("is_mapping", |input, _| {
        Ok(Value::Bool(predicate::is_mapping(&input)))
    });
    table.insert("is_zero", |input, _| Ok(Value::Bool(predicate::is_zero(&input))));
    table.insert("is_increasing", |input, _| {
        Ok(Value::Bool(predicate::is_increasing(seq_input(
            &input,
            "is_increasing",
        )?)))
    });
    table.insert("is_strictly_increasing", |input, _| {
        Ok(Value::Bool(predicate::is_strictly_increasing(seq_input(
            &input,
            "is_strictly_increasing",
        )?)))
    });
    table.insert("is_decreasing", |input, _| {
        Ok(Value::Bool(predicate::is_decreasing(seq_input(
            &input,
            "is_decreasing",
        )?)))
    });
    table.insert("is_strictly_decreasing", |input, _| {
        Ok(Value::Bool(predicate::is_strictly_decreasing(seq_input(
            &input,
            "is_strictly_decreasing",
        )?)))
    });
}

fn register_string(table: &mut HashMap<&'static str, Adapter>) {
    table.insert("camel_case", |input, _| {
        Ok(Value::from(string::camel_case(str_input(&input, "camel_case")?)))
    });
    table.insert("pascal_case", |input, _| {
        Ok(Value::from(string::pascal_case(str_input(
            &input,
            "pascal_case",
        )?)))
    });
    table.insert("snake_case", |input, _| {
        Ok(Value::from(string::snake_case(str_input(&input, "snake_case")?)))
    });
    table.insert("kebab_case", |input, _| {
        Ok(Value::from(string::kebab_case(str_input(&input, "kebab_case")?)))
    });
    table.insert("start_case", |input, _| {
        Ok(Value::from(string::start_case(str_input(&input, "start_case")?)))
    });
    table.insert("capitalize", |input, _| {
        Ok(Value::from(string::capitalize(str_input(&input, "capitalize")?)))
    });
    table.insert("decapitalize", |input, _| {
        Ok(Value::from(string::decapitalize(str_input(
            &input,
            "decapitalize",
        )?)))
    });
    table.insert("upper_first", |input, _| {
        Ok(Value::from(string::upper_first(str_input(
            &input,
            "upper_first",
        )?)))
    });
    table.insert("lower_first", |input, _| {
        Ok(Value::from(string::lower_first(str_input(
            &input,
            "lower_first",
        )?)))
    });
    table.insert("swap_case", |input, _| {
        Ok(Value::from(string::swap_case(str_input(&input, "swap_case")?)))
    });
    table.insert("words", |input, _| {
        Ok(Value::Seq(
            string::words(str_input(&input, "words")?)
                .into_iter()
                .map(Value::from)
                .collect(),
        ))
    });
    table.insert("pad", |input, args| {
        let length = arg(args, 0, "pad")?.expect_index("pad")?;
        let fill = args.get(1).map_or(Ok(" "), |filler| filler.expect_text("pad"))?;
        Ok(Value::from(string::pad(
            str_input(&input, "pad")?,
            length,
            fill,
        )))
    });
    table.insert("pad_start", |input, args| {
        let length = arg(args, 0, "pad_start")?.expect_index("pad_start")?;
        let fill = args
            .get(1)
            .map_or(Ok(" "), |filler| filler.expect_text("pad_start"))?;
        Ok(Value::from(string::pad_start(
            str_input(&input, "pad_start")?,
            length,
            fill,
        )))
    });
    table.insert("pad_end", |input, args| {
        let length = arg(args, 0, "pad_end")?.expect_index("pad_end")?;
        let fill = args
            .get(1)
            .map_or(Ok(" "), |filler| filler.expect_text("pad_end"))?;
        Ok(Value::from(string::pad_end(
            str_input(&input, "pad_end")?,
            length,
            fill,
        )))
    });
    table.insert("trim", |input, args| {
        let charset = optional_text(args, 0, "trim")?;
        Ok(Value::from(string::trim_text(
            str_input(&input, "trim")?,
            charset,
        )))
    });
    table.insert("trim_start", |input, args| {
        let charset = optional_text(args, 0, "trim_start")?;
        Ok(Value::from(string::trim_start_text(
            str_input(&input, "trim_start")?,
            charset,
        )))
    });
    table.insert("trim_end", |input, args| {
        let charset = optional_text(args, 0, "trim_end")?;
        Ok(Value::from(string::trim_end_text(
            str_input(&input, "trim_end")?,
            charset,
        )))
    });
    table.insert("repeat", |input, args| {
        let count = arg(args, 0, "repeat")?.expect_index("repeat")?;
        Ok(Value::from(string::repeat_text(
            str_input(&input, "repeat")?,
            count,
        )))
    });
    table.insert("truncate", |input, args| {
        let length = arg(args, 0, "truncate")?.expect_index("truncate")?;
        let omission = args
            .get(1)
            .map_or(Ok("..."), |text| text.expect_text("truncate"))?;
        Ok(Value::from(string::truncate_text(
            str_input(&input, "truncate")?,
            length,
            omission,
        )))
    });
    table.insert("ensure_starts_with", |input, args| {
        let prefix = arg(args, 0, "ensure_starts_with")?.expect_text("ensure_starts_with")?;
        Ok(Value::from(string::ensure_starts_with(
            str_input(&input, "ensure_starts_with")?,
            prefix,
        )))
    });
    table.insert("ensure_ends_with", |input, args| {
        let suffix = arg(args, 0, "ensure_ends_with")?.expect_text("ensure_ends_with")?;
        Ok(Value::from(string::ensure_ends_with(
            str_input(&input, "ensure_ends_with")?,
            suffix,
        )))
    });
    table.insert("escape", |input, _| {
        Ok(Value::from(string::escape(str_input(&input, "escape")?)))
    });
    table.insert("unescape", |input, _| {
        Ok(Value::from(string::unescape(str_input(&input, "unescape")?)))
    });
    table.insert("interpolate", |input, args| {
        let bindings = arg(args, 0, "interpolate")?.expect_value("interpolate")?;
        Ok(Value::from(string::interpolate(
            str_input(&input, "interpolate")?,
            bindings,
        )))
    });
    table.insert("url_join", |input, args| {
        let parts = text_list(args, 0, "url_join")?;
        let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
        Ok(Value::from(string::url_join(
            str_input(&input, "url_join")?,
            &refs,
        )))
    });
    table.insert("number_format", |input, args| {
        let precision = arg(args, 0, "number_format")?.expect_index("number_format")?;
        let decimal = args
            .get(1)
            .map_or(Ok("."), |sep| sep.expect_text("number_format"))?;
        let thousands = args
            .get(2)
            .map_or(Ok(","), |sep| sep.expect_text("number_format"))?;
        Ok(Value::from(string::number_format(
            number_input(&input, "number_format")?,
            precision,
            decimal,
            thousands,
        )))
    });
}

fn optional_text<'a>(
    args: &'a [ChainArg],
    position: usize,
    operation: &'static str,
) -> Result<Option<&'a str>, ChainError> {
    args.get(position)
        .map(|text| text.expect_text(operation))
        .transpose()
}

fn register_number(table: &mut HashMap<&'static str, Adapter>) {
    table.insert("clamp", |input, args| {
        let lower = arg(args, 0, "clamp")?.expect_number("clamp")?;
        let upper = arg(args, 1, "clamp")?.expect_number("clamp")?;
        Ok(Value::Float(number::clamp(
            number_input(&input, "clamp")?,
            lower,
            upper,
        )))
    });
    table.insert("in_range", |input, args| {
        let start = arg(args, 0, "in_range")?.expect_number("in_range")?;
        let end = arg(args, 1, "in_range")?.expect_number("in_range")?;
        Ok(Value::Bool(number::in_range(
            number_input(&input, "in_range")?,
            start,
            end,
        )))
    });
    table.insert("round", |input, args| {
        let precision = args
            .first()
            .map_or(Ok(0), |digits| digits.expect_index("round"))?;
        let precision = i32::try_from(precision)
            .map_err(|_| argument("round", "precision out of range"))?;
        Ok(Value::Float(number::round_to(
            number_input(&input, "round")?,
            precision,
        )))
    });
    table.insert("sum", |input, _| Ok(Value::Float(number::sum_values(&input))));
    table.insert("mean", |input, _| Ok(optional_float(number::mean_values(&input))));
    table.insert("max_value", |input, _| {
        Ok(optional_float(number::max_value(&input)))
    });
    table.insert("min_value", |input, _| {
        Ok(optional_float(number::min_value(&input)))
    });
    table.insert("median", |input, _| {
        Ok(optional_float(number::median(&float_items(
            &input, "median",
        )?)))
    });
    table.insert("variance", |input, _| {
        Ok(optional_float(number::variance(&float_items(
            &input, "variance",
        )?)))
    });
    table.insert("std_deviation", |input, _| {
        Ok(optional_float(number::std_deviation(&float_items(
            &input,
            "std_deviation",
        )?)))
    });
    table.insert("scale", |input, args| {
        let maximum = args
            .first()
            .map_or(Ok(1.0), |limit| limit.expect_number("scale"))?;
        let scaled = number::scale(&float_items(&input, "scale")?, maximum);
        Ok(Value::Seq(scaled.into_iter().map(Value::Float).collect()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_plain_names() {
        assert!(lookup("flatten").is_some());
        assert!(lookup("group_by").is_some());
    }

    #[test]
    fn lookup_falls_back_to_the_underscore_alias() {
        assert!(lookup("map").is_some());
        assert!(lookup("filter").is_some());
        assert!(lookup("size").is_some());
        assert!(lookup("find").is_some());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup("Map").is_none());
        assert!(lookup("FLATTEN").is_none());
    }

    #[test]
    fn adapters_report_input_shape_mismatches() {
        let adapter = lookup("flatten").unwrap();
        let result = adapter(Value::Int(3), &[]);
        assert!(matches!(result, Err(ChainError::Operation(_))));
    }
}
