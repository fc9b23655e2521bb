mod history_vm;
mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use history_vm::{HistoryRowVm, map_history_rows};
pub use quiz_vm::{OptionVm, QuestionVm, QuizVm};
pub use results_vm::{ResultsVm, ReviewVm, band_class};
pub use time_fmt::{format_epoch_millis, format_epoch_millis_in};
