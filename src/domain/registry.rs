//! Operation catalog, declarative descriptors, and argument access
//!
//! Every operation is registered once at startup with an explicit parameter
//! list. The `Descriptor` is derived from that list at registration time and
//! is the single source of truth for both discovery (`tools/list`) and
//! argument validation; nothing re-derives schema data at call time.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::domain::ops;
use crate::errors::{DomainError, RegistryError};

/// Primitive wire type of a single parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Number,
    Integer,
    Boolean,
    Array,
    String,
}

impl ParamType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::String => "string",
        }
    }
}

/// One declared parameter of an operation, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamType,
    pub required: bool,
}

impl ParamSpec {
    pub const fn required(name: &'static str, kind: ParamType) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamType) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Structural description of an operation as published by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Descriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: InputSchema,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    pub properties: Map<String, Value>,
    pub required: Vec<&'static str>,
}

impl Descriptor {
    fn from_params(name: &'static str, description: &'static str, params: &[ParamSpec]) -> Self {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for param in params {
            properties.insert(
                param.name.to_string(),
                json!({
                    "type": param.kind.as_str(),
                    "description": format!("Parameter {}", param.name),
                }),
            );
            if param.required {
                required.push(param.name);
            }
        }

        Self {
            name,
            description,
            input_schema: InputSchema {
                schema_type: "object",
                properties,
                required,
            },
        }
    }
}

/// Typed read access to a validated argument map.
pub struct Args<'a> {
    values: &'a Map<String, Value>,
}

impl<'a> Args<'a> {
    pub fn new(values: &'a Map<String, Value>) -> Self {
        Self { values }
    }

    fn get(&self, name: &str) -> Result<&Value, DomainError> {
        self.values
            .get(name)
            .ok_or_else(|| DomainError::MissingParameter(name.to_string()))
    }

    pub fn number(&self, name: &str) -> Result<f64, DomainError> {
        self.get(name)?
            .as_f64()
            .ok_or_else(|| DomainError::ExpectedNumber(name.to_string()))
    }

    pub fn integer(&self, name: &str) -> Result<i64, DomainError> {
        value_as_integer(self.get(name)?)
            .ok_or_else(|| DomainError::ExpectedInteger(name.to_string()))
    }

    pub fn integer_or(&self, name: &str, default: i64) -> Result<i64, DomainError> {
        match self.values.get(name) {
            None => Ok(default),
            Some(value) => value_as_integer(value)
                .ok_or_else(|| DomainError::ExpectedInteger(name.to_string())),
        }
    }

    pub fn numbers(&self, name: &str) -> Result<Vec<f64>, DomainError> {
        self.get(name)?
            .as_array()
            .ok_or_else(|| DomainError::ExpectedNumberArray(name.to_string()))?
            .iter()
            .map(|item| {
                item.as_f64()
                    .ok_or_else(|| DomainError::ExpectedNumberArray(name.to_string()))
            })
            .collect()
    }
}

/// Accept integers and integral floats; a fractional value is not an integer.
pub fn value_as_integer(value: &Value) -> Option<i64> {
    if let Some(int) = value.as_i64() {
        return Some(int);
    }

    let float = value.as_f64()?;
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 {
        return Some(float as i64);
    }

    None
}

/// Result of a pure operation, kept typed so transports can render it either
/// as a JSON value or as text.
#[derive(Debug, Clone, PartialEq)]
pub enum OpOutput {
    Number(f64),
    Int(i64),
    Bool(bool),
}

impl OpOutput {
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(value) => format!("{value}"),
            Self::Int(value) => format!("{value}"),
            Self::Bool(value) => format!("{value}"),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Number(value) => json!(value),
            Self::Int(value) => json!(value),
            Self::Bool(value) => json!(value),
        }
    }
}

impl From<f64> for OpOutput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for OpOutput {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for OpOutput {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

pub type OpResult = Result<OpOutput, DomainError>;

pub type Handler = fn(&Args) -> OpResult;

/// A registered operation: descriptor plus the pure function behind it.
#[derive(Debug, Clone)]
pub struct Operation {
    descriptor: Descriptor,
    params: Vec<ParamSpec>,
    handler: Handler,
}

impl Operation {
    pub fn new(
        name: &'static str,
        description: &'static str,
        params: Vec<ParamSpec>,
        handler: Handler,
    ) -> Self {
        let descriptor = Descriptor::from_params(name, description, &params);
        Self {
            descriptor,
            params,
            handler,
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn invoke(&self, args: &Args) -> OpResult {
        (self.handler)(args)
    }
}

/// Immutable, name-keyed catalog of operations. Built once at process start;
/// insertion order is preserved for listing.
#[derive(Debug, Default)]
pub struct Registry {
    operations: Vec<Operation>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, operation: Operation) -> Result<(), RegistryError> {
        let name = operation.name();
        if self.index.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }

        self.index.insert(name, self.operations.len());
        self.operations.push(operation);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Option<&Operation> {
        self.index.get(name).map(|&at| &self.operations[at])
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn descriptors(&self) -> Vec<&Descriptor> {
        self.operations.iter().map(Operation::descriptor).collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// The full scientific calculator catalog.
    pub fn full() -> Self {
        let mut registry = Self::new();
        for operation in catalog() {
            registry
                .register(operation)
                .expect("catalog operation names must be unique");
        }
        registry
    }

    /// Reduced-capability compatibility shim exposing only `add`, matching
    /// the minimal stream server this service replaces.
    pub fn minimal() -> Self {
        let mut registry = Self::new();
        registry
            .register(Operation::new(
                "add",
                "Add two numbers",
                two_numbers(),
                ops::add,
            ))
            .expect("single registration cannot conflict");
        registry
    }
}

fn two_numbers() -> Vec<ParamSpec> {
    vec![
        ParamSpec::required("a", ParamType::Number),
        ParamSpec::required("b", ParamType::Number),
    ]
}

fn two_integers() -> Vec<ParamSpec> {
    vec![
        ParamSpec::required("a", ParamType::Integer),
        ParamSpec::required("b", ParamType::Integer),
    ]
}

fn one_number() -> Vec<ParamSpec> {
    vec![ParamSpec::required("x", ParamType::Number)]
}

fn number_list() -> Vec<ParamSpec> {
    vec![ParamSpec::required("numbers", ParamType::Array)]
}

fn no_params() -> Vec<ParamSpec> {
    Vec::new()
}

fn catalog() -> Vec<Operation> {
    use ParamSpec as P;
    use ParamType::{Integer, Number};

    vec![
        Operation::new("add", "Add two numbers", two_numbers(), ops::add),
        Operation::new(
            "subtract",
            "Subtract two numbers",
            two_numbers(),
            ops::subtract,
        ),
        Operation::new(
            "multiply",
            "Multiply two numbers",
            two_numbers(),
            ops::multiply,
        ),
        Operation::new("divide", "Divide two numbers", two_numbers(), ops::divide),
        Operation::new(
            "modulo",
            "Calculate modulo (remainder of division)",
            two_numbers(),
            ops::modulo,
        ),
        Operation::new(
            "abs_value",
            "Calculate absolute value",
            one_number(),
            ops::abs_value,
        ),
        Operation::new(
            "power",
            "Raise a number to a power (a^b)",
            two_numbers(),
            ops::power,
        ),
        Operation::new("sqrt", "Calculate square root", one_number(), ops::sqrt),
        Operation::new("cbrt", "Calculate cube root", one_number(), ops::cbrt),
        Operation::new(
            "nth_root",
            "Calculate nth root of a number",
            vec![P::required("x", Number), P::required("n", Number)],
            ops::nth_root,
        ),
        Operation::new(
            "factorial",
            "Calculate factorial",
            vec![P::required("n", Integer)],
            ops::factorial,
        ),
        Operation::new(
            "permutation",
            "Calculate permutation P(n,r) = n!/(n-r)!",
            vec![P::required("n", Integer), P::required("r", Integer)],
            ops::permutation,
        ),
        Operation::new(
            "combination",
            "Calculate combination C(n,r) = n!/(r!(n-r)!)",
            vec![P::required("n", Integer), P::required("r", Integer)],
            ops::combination,
        ),
        Operation::new("sin", "Calculate sine (in radians)", one_number(), ops::sin),
        Operation::new(
            "cos",
            "Calculate cosine (in radians)",
            one_number(),
            ops::cos,
        ),
        Operation::new(
            "tan",
            "Calculate tangent (in radians)",
            one_number(),
            ops::tan,
        ),
        Operation::new(
            "asin",
            "Calculate arc sine (returns radians)",
            one_number(),
            ops::asin,
        ),
        Operation::new(
            "acos",
            "Calculate arc cosine (returns radians)",
            one_number(),
            ops::acos,
        ),
        Operation::new(
            "atan",
            "Calculate arc tangent (returns radians)",
            one_number(),
            ops::atan,
        ),
        Operation::new(
            "atan2",
            "Calculate arc tangent of y/x (returns radians)",
            vec![P::required("y", Number), P::required("x", Number)],
            ops::atan2,
        ),
        Operation::new(
            "sin_deg",
            "Calculate sine (in degrees)",
            one_number(),
            ops::sin_deg,
        ),
        Operation::new(
            "cos_deg",
            "Calculate cosine (in degrees)",
            one_number(),
            ops::cos_deg,
        ),
        Operation::new(
            "tan_deg",
            "Calculate tangent (in degrees)",
            one_number(),
            ops::tan_deg,
        ),
        Operation::new(
            "asin_deg",
            "Calculate arc sine (returns degrees)",
            one_number(),
            ops::asin_deg,
        ),
        Operation::new(
            "acos_deg",
            "Calculate arc cosine (returns degrees)",
            one_number(),
            ops::acos_deg,
        ),
        Operation::new(
            "atan_deg",
            "Calculate arc tangent (returns degrees)",
            one_number(),
            ops::atan_deg,
        ),
        Operation::new(
            "sinh",
            "Calculate hyperbolic sine",
            one_number(),
            ops::sinh,
        ),
        Operation::new(
            "cosh",
            "Calculate hyperbolic cosine",
            one_number(),
            ops::cosh,
        ),
        Operation::new(
            "tanh",
            "Calculate hyperbolic tangent",
            one_number(),
            ops::tanh,
        ),
        Operation::new(
            "asinh",
            "Calculate inverse hyperbolic sine",
            one_number(),
            ops::asinh,
        ),
        Operation::new(
            "acosh",
            "Calculate inverse hyperbolic cosine",
            one_number(),
            ops::acosh,
        ),
        Operation::new(
            "atanh",
            "Calculate inverse hyperbolic tangent",
            one_number(),
            ops::atanh,
        ),
        Operation::new(
            "log",
            "Calculate natural logarithm",
            one_number(),
            ops::log,
        ),
        Operation::new(
            "log10",
            "Calculate logarithm base 10",
            one_number(),
            ops::log10,
        ),
        Operation::new(
            "log2",
            "Calculate logarithm base 2",
            one_number(),
            ops::log2,
        ),
        Operation::new(
            "log_base",
            "Calculate logarithm with custom base",
            vec![P::required("x", Number), P::required("base", Number)],
            ops::log_base,
        ),
        Operation::new("exp", "Calculate e^x", one_number(), ops::exp),
        Operation::new("exp2", "Calculate 2^x", one_number(), ops::exp2),
        Operation::new(
            "floor",
            "Calculate floor (largest integer <= x)",
            one_number(),
            ops::floor,
        ),
        Operation::new(
            "ceil",
            "Calculate ceiling (smallest integer >= x)",
            one_number(),
            ops::ceil,
        ),
        Operation::new(
            "round_number",
            "Round to nearest integer or specified decimal places",
            vec![P::required("x", Number), P::optional("decimals", Integer)],
            ops::round_number,
        ),
        Operation::new(
            "trunc",
            "Truncate to integer part",
            one_number(),
            ops::trunc,
        ),
        Operation::new(
            "deg_to_rad",
            "Convert degrees to radians",
            vec![P::required("degrees", Number)],
            ops::deg_to_rad,
        ),
        Operation::new(
            "rad_to_deg",
            "Convert radians to degrees",
            vec![P::required("radians", Number)],
            ops::rad_to_deg,
        ),
        Operation::new("mean", "Calculate mean of a list", number_list(), ops::mean),
        Operation::new(
            "median",
            "Calculate median of a list",
            number_list(),
            ops::median,
        ),
        Operation::new("mode", "Calculate mode of a list", number_list(), ops::mode),
        Operation::new(
            "stdev",
            "Calculate standard deviation",
            number_list(),
            ops::stdev,
        ),
        Operation::new(
            "variance",
            "Calculate variance",
            number_list(),
            ops::variance,
        ),
        Operation::new(
            "range_calc",
            "Calculate range (max - min)",
            number_list(),
            ops::range_calc,
        ),
        Operation::new(
            "sum_list",
            "Calculate sum of a list",
            number_list(),
            ops::sum_list,
        ),
        Operation::new(
            "product",
            "Calculate product of a list",
            number_list(),
            ops::product,
        ),
        Operation::new(
            "min_value",
            "Find minimum value in a list",
            number_list(),
            ops::min_value,
        ),
        Operation::new(
            "max_value",
            "Find maximum value in a list",
            number_list(),
            ops::max_value,
        ),
        Operation::new("pi", "Get the value of \u{03c0}", no_params(), ops::pi),
        Operation::new("e", "Get the value of e", no_params(), ops::e),
        Operation::new(
            "tau",
            "Get the value of \u{03c4} (2\u{03c0})",
            no_params(),
            ops::tau,
        ),
        Operation::new(
            "golden_ratio",
            "Get the golden ratio \u{03c6}",
            no_params(),
            ops::golden_ratio,
        ),
        Operation::new(
            "gcd",
            "Calculate greatest common divisor",
            two_integers(),
            ops::gcd,
        ),
        Operation::new(
            "lcm",
            "Calculate least common multiple",
            two_integers(),
            ops::lcm,
        ),
        Operation::new(
            "is_prime",
            "Check if a number is prime",
            vec![P::required("n", Integer)],
            ops::is_prime,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn full_catalog_registers_every_operation_once() {
        let registry = Registry::full();
        assert_eq!(registry.len(), 61);
        assert_eq!(registry.descriptors().len(), registry.len());
    }

    #[test]
    fn descriptor_parameters_match_declared_order_and_count() {
        let registry = Registry::full();
        for operation in registry.operations() {
            let descriptor = operation.descriptor();
            assert_eq!(
                descriptor.input_schema.properties.len(),
                operation.params().len(),
                "property count mismatch for {}",
                operation.name()
            );
            for param in operation.params() {
                let property = descriptor
                    .input_schema
                    .properties
                    .get(param.name)
                    .expect("declared parameter must appear in schema");
                assert_eq!(property["type"], json!(param.kind.as_str()));
                assert_eq!(
                    descriptor.input_schema.required.contains(&param.name),
                    param.required
                );
            }
        }
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = Registry::minimal();
        let err = registry
            .register(Operation::new(
                "add",
                "Add two numbers",
                two_numbers(),
                ops::add,
            ))
            .expect_err("duplicate name must be rejected");
        assert_eq!(err, crate::errors::RegistryError::DuplicateName("add".to_string()));
    }

    #[test]
    fn resolve_unknown_operation_returns_none() {
        assert!(Registry::full().resolve("frobnicate").is_none());
    }

    #[test]
    fn listing_preserves_registration_order() {
        let registry = Registry::full();
        let names: Vec<&str> = registry.descriptors().iter().map(|d| d.name).collect();
        assert_eq!(names[0], "add");
        assert_eq!(names[1], "subtract");
        assert_eq!(names[names.len() - 1], "is_prime");
    }

    #[test]
    fn descriptor_serializes_to_input_schema_shape() {
        let registry = Registry::full();
        let divide = registry.resolve("divide").expect("divide is registered");
        let value = serde_json::to_value(divide.descriptor()).expect("descriptor serializes");
        assert_eq!(value["name"], "divide");
        assert_eq!(value["inputSchema"]["type"], "object");
        assert_eq!(value["inputSchema"]["properties"]["a"]["type"], "number");
        assert_eq!(value["inputSchema"]["required"], json!(["a", "b"]));
    }

    #[test]
    fn optional_parameters_are_not_required() {
        let registry = Registry::full();
        let round = registry.resolve("round_number").expect("registered");
        let schema = &round.descriptor().input_schema;
        assert!(schema.properties.contains_key("decimals"));
        assert_eq!(schema.required, vec!["x"]);
    }

    #[test]
    fn minimal_catalog_only_exposes_add() {
        let registry = Registry::minimal();
        assert_eq!(registry.len(), 1);
        assert!(registry.resolve("add").is_some());
        assert!(registry.resolve("divide").is_none());
    }

    #[test]
    fn integral_floats_are_integers_but_fractions_are_not() {
        assert_eq!(value_as_integer(&json!(5)), Some(5));
        assert_eq!(value_as_integer(&json!(5.0)), Some(5));
        assert_eq!(value_as_integer(&json!(5.5)), None);
        assert_eq!(value_as_integer(&json!("5")), None);
    }
}
