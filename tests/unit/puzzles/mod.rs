mod answer;
mod year2017;
