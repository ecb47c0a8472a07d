use super::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Column classification: numeric vs categorical
// ---------------------------------------------------------------------------

/// Partition of the dataset's columns by inferred type.  Every column appears
/// in exactly one of the two lists, keeping dataset column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

impl Schema {
    pub fn has_categorical(&self) -> bool {
        !self.categorical.is_empty()
    }

    pub fn has_numeric(&self) -> bool {
        !self.numeric.is_empty()
    }
}

/// Classify every column of the dataset.
///
/// Pinned rule: a column is numeric iff it has at least one non-null cell and
/// every non-null cell is Integer or Float.  Bool columns, all-null columns
/// and mixed columns (numeric-looking strings beside text) are categorical.
pub fn classify(dataset: &Dataset) -> Schema {
    let mut schema = Schema::default();

    for (idx, name) in dataset.columns.iter().enumerate() {
        let mut saw_numeric = false;
        let mut all_numeric = true;

        for row in &dataset.rows {
            match &row[idx] {
                CellValue::Null => {}
                v if v.is_numeric() => saw_numeric = true,
                _ => {
                    all_numeric = false;
                    break;
                }
            }
        }

        if saw_numeric && all_numeric {
            schema.numeric.push(name.clone());
        } else {
            schema.categorical.push(name.clone());
        }
    }

    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;

    fn dataset(csv: &str) -> Dataset {
        load_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn partition_is_disjoint_and_exhaustive() {
        let ds = dataset("city,sales,year,ok\nBerlin,1.5,2020,true\nParis,2.0,2021,false\n");
        let schema = classify(&ds);

        let mut all: Vec<&String> = schema.numeric.iter().chain(&schema.categorical).collect();
        all.sort();
        let mut expected: Vec<&String> = ds.columns.iter().collect();
        expected.sort();
        assert_eq!(all, expected);
        assert!(schema.numeric.iter().all(|c| !schema.categorical.contains(c)));
    }

    #[test]
    fn integers_and_floats_are_numeric() {
        let ds = dataset("a,b\n1,0.5\n2,1.5\n");
        let schema = classify(&ds);
        assert_eq!(schema.numeric, vec!["a", "b"]);
        assert!(schema.categorical.is_empty());
    }

    #[test]
    fn mixed_column_is_categorical() {
        let ds = dataset("v\n1\n2\nx\n");
        let schema = classify(&ds);
        assert_eq!(schema.categorical, vec!["v"]);
    }

    #[test]
    fn nulls_do_not_break_numeric() {
        let ds = dataset("v\n1\n\n3\n");
        let schema = classify(&ds);
        assert_eq!(schema.numeric, vec!["v"]);
    }

    #[test]
    fn bool_and_all_null_are_categorical() {
        let ds = dataset("flag,empty\ntrue,\nfalse,\n");
        let schema = classify(&ds);
        assert_eq!(schema.categorical, vec!["flag", "empty"]);
        assert!(schema.numeric.is_empty());
    }
}
