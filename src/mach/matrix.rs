use super::{Operation, Val};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Dimensions of a nested collection. Ragged collections are rejected.
pub fn shape(items: &[Val]) -> Result<Vec<usize>> {
    let mut inner: Option<Vec<usize>> = None;
    for item in items {
        let item_shape = match item {
            Val::Matrix(row) => shape(row)?,
            _ => vec![],
        };
        match &inner {
            None => inner = Some(item_shape),
            Some(s) if *s == item_shape => {}
            Some(_) => return Err(dimension_mismatch()),
        }
    }
    let mut dims = vec![items.len()];
    dims.extend(inner.unwrap_or_default());
    Ok(dims)
}

pub fn flatten(items: &[Val]) -> Vec<Val> {
    let mut v = vec![];
    for item in items {
        match item {
            Val::Matrix(row) => v.extend(flatten(row)),
            _ => v.push(item.clone()),
        }
    }
    v
}

pub fn size(items: &[Val]) -> Result<Val> {
    Ok(Val::Matrix(
        shape(items)?
            .into_iter()
            .map(|d| Val::Number((d as i64).into()))
            .collect(),
    ))
}

fn rows(items: &[Val]) -> Vec<Vec<Val>> {
    items
        .iter()
        .map(|row| match row {
            Val::Matrix(r) => r.clone(),
            v => vec![v.clone()],
        })
        .collect()
}

pub fn transpose(items: &[Val]) -> Result<Val> {
    let dims = shape(items)?;
    match dims.len() {
        1 => Ok(Val::Matrix(items.to_vec())),
        2 => {
            let rows = rows(items);
            let mut out = vec![];
            for c in 0..dims[1] {
                out.push(Val::Matrix(rows.iter().map(|r| r[c].clone()).collect()));
            }
            Ok(Val::Matrix(out))
        }
        n => Err(error!(DimensionMismatch;
            &format!("Matrix must be a vector or two dimensional (size: {})", n))),
    }
}

fn dot(lhs: &[Val], rhs: &[Val]) -> Result<Val> {
    if lhs.len() != rhs.len() {
        return Err(dimension_mismatch());
    }
    let mut acc = Val::Number(super::Number::zero());
    for (l, r) in lhs.iter().zip(rhs.iter()) {
        acc = Operation::sum(acc, Operation::product(l.clone(), r.clone())?)?;
    }
    Ok(acc)
}

/// Dot product of vectors, or the matrix product when either side has
/// two dimensions.
pub fn multiply(lhs: &[Val], rhs: &[Val]) -> Result<Val> {
    let l = shape(lhs)?;
    let r = shape(rhs)?;
    match (l.len(), r.len()) {
        (1, 1) => dot(lhs, rhs),
        (2, 1) => {
            let out: Result<Vec<Val>> = rows(lhs).iter().map(|row| dot(row, rhs)).collect();
            Ok(Val::Matrix(out?))
        }
        (1, 2) | (2, 2) => {
            let columns = match transpose(rhs)? {
                Val::Matrix(c) => rows(&c),
                _ => return Err(dimension_mismatch()),
            };
            let product_row = |row: &[Val]| -> Result<Val> {
                let out: Result<Vec<Val>> = columns.iter().map(|col| dot(row, col)).collect();
                Ok(Val::Matrix(out?))
            };
            if l.len() == 1 {
                product_row(lhs)
            } else {
                let out: Result<Vec<Val>> = rows(lhs).iter().map(|row| product_row(row)).collect();
                Ok(Val::Matrix(out?))
            }
        }
        _ => Err(dimension_mismatch()),
    }
}

fn dimension_mismatch() -> Error {
    error!(DimensionMismatch; "Dimension mismatch")
}
