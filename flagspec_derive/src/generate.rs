mod flag;
mod flag_set;
