mod catalog;
mod entry;
mod note;
mod preferences;
mod search;

pub use catalog::{CorpusOrigin, ExportDocument, SyncReport, VaultStatus, VersionInfo};
pub use entry::{Entry, EntryPatch, EntrySource, EntryView, Level, NewEntry};
pub use note::{NewNote, Note, NotePatch};
pub use preferences::{MAX_FONT_SIZE, MIN_FONT_SIZE, Preferences, PreferencesPatch};
pub use search::{ALL_CATEGORIES, MatchMode, SearchFilter, SearchRequest, SortCriterion};
