//! Event kinds reported by the entity system
//!
//! - [`EntityEvent`] - lifecycle stage carried by a class event
//! - [`ContainerOpType`] - operation carried by a container event
//! - [`TableOpType`] / [`TableEventData`] - descriptor carried by a table event

/// Entity lifecycle stage
///
/// Emitted in this order while an entity is created, and the last two while
/// it is destroyed.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EntityEvent {
    #[default]
    None = 0,
    PreLoadData = 1,
    LoadData = 2,
    PreEffectData = 3,
    EffectData = 4,
    PostEffectData = 5,
    DataFinished = 6,
    PreDestroy = 7,
    Destroy = 8,
}

impl EntityEvent {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PreLoadData => "pre_load_data",
            Self::LoadData => "load_data",
            Self::PreEffectData => "pre_effect_data",
            Self::EffectData => "effect_data",
            Self::PostEffectData => "post_effect_data",
            Self::DataFinished => "data_finished",
            Self::PreDestroy => "pre_destroy",
            Self::Destroy => "destroy",
        }
    }
}

/// Container slot operation
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContainerOpType {
    #[default]
    None = 0,
    /// An entity was placed into a slot
    Place = 1,
    /// An entity was removed from a slot (still alive)
    Remove = 2,
    /// An entity in a slot was destroyed
    Destroy = 3,
    /// Two slots exchanged their contents
    Swap = 4,
}

impl ContainerOpType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Place => "place",
            Self::Remove => "remove",
            Self::Destroy => "destroy",
            Self::Swap => "swap",
        }
    }
}

/// Table row operation
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TableOpType {
    #[default]
    None = 0,
    Add = 1,
    Delete = 2,
    Update = 3,
    Swap = 4,
    /// Whole row overwritten
    Coverage = 5,
}

impl TableOpType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Update => "update",
            Self::Swap => "swap",
            Self::Coverage => "coverage",
        }
    }
}

/// Descriptor of a table change
///
/// `table_index` is the key table listeners subscribe under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableEventData {
    pub op_type: TableOpType,
    pub table_index: u32,
    pub table_name: String,
    pub row: u32,
    pub data_index: u32,
    pub data_name: String,
}

impl TableEventData {
    /// Create a descriptor for a change in `table_name` (at `table_index`)
    pub fn new(op_type: TableOpType, table_index: u32, table_name: impl Into<String>) -> Self {
        Self {
            op_type,
            table_index,
            table_name: table_name.into(),
            ..Default::default()
        }
    }

    /// Set the affected row
    pub fn with_row(mut self, row: u32) -> Self {
        self.row = row;
        self
    }

    /// Set the affected column
    pub fn with_column(mut self, data_index: u32, data_name: impl Into<String>) -> Self {
        self.data_index = data_index;
        self.data_name = data_name.into();
        self
    }
}
