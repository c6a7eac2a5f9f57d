mod settings;

pub use settings::{
    ColumnEditView, ColumnListView, ColumnSettings, Control, MainView, SettingsMap,
    TableEditView, TableIdentity, TableListView, TableSettings,
};
