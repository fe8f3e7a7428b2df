mod listing;
mod series;
mod table;
