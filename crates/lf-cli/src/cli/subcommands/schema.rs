use clap::ValueEnum;

/// Record types `labfolder schema` can describe.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    Entry,
    Element,
    DataItem,
    Table,
}
