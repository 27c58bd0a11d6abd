use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Implicit,
    Mandatory,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    // `Option<T>`: read as is, absent when not supplied.
    Optional,
    // `T`: the flag must resolve to a value.
    Required,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveFlag {
    pub field_name: syn::Ident,
    pub flag_type: DeriveValue,
    pub field_kind: FieldKind,
    pub key: DeriveValue,
    pub aliases: Vec<DeriveValue>,
    pub help: Option<DeriveValue>,
    pub default: Option<DeriveValue>,
    pub min: Option<DeriveValue>,
    pub max: Option<DeriveValue>,
    pub requirement: Requirement,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveFlagSet {
    pub struct_name: syn::Ident,
    pub flags: Vec<DeriveFlag>,
}
