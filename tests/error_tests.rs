use dynarray::{DynArray, DynArrayError, PairSeq};

#[test]
fn test_error_invalid_growth_factor() {
    let result = DynArray::<u8>::with_growth_factor(4, 1);
    assert_eq!(
        result.unwrap_err(),
        DynArrayError::InvalidConfiguration {
            parameter: "growth_factor",
            value: 1
        }
    );

    assert!(DynArray::<u8>::with_growth_factor(4, 0).is_err());
    assert!(DynArray::<u8>::with_growth_factor(4, 2).is_ok());
}

#[test]
fn test_error_detailed_index_out_of_bounds() {
    let array = DynArray::from([1, 2, 3]);

    assert_eq!(
        array.get(3).unwrap_err(),
        DynArrayError::IndexOutOfBounds {
            index: 3,
            length: 3
        }
    );
    assert_eq!(
        array.get(usize::MAX).unwrap_err(),
        DynArrayError::IndexOutOfBounds {
            index: usize::MAX,
            length: 3
        }
    );
}

#[test]
fn test_error_index_at_len_for_every_size() {
    let mut array = DynArray::with_capacity(0).unwrap();

    for size in 0..40 {
        let expected = DynArrayError::IndexOutOfBounds {
            index: size,
            length: size,
        };
        assert_eq!(array.get(size).unwrap_err(), expected);
        assert_eq!(array.remove_at(size).unwrap_err(), expected);
        assert_eq!(array.len(), size);
        array.push(size).unwrap();
    }
}

#[test]
fn test_error_out_of_bounds_on_empty_array() {
    let mut array = DynArray::<i32>::with_default_capacity().unwrap();

    assert!(array.get(0).is_err());
    assert!(array.get_mut(0).is_err());
    assert!(array.remove_at(0).is_err());
    assert_eq!(
        array.set(0, 1).unwrap_err(),
        DynArrayError::IndexOutOfBounds {
            index: 0,
            length: 0
        }
    );
    assert!(array.is_empty());
}

#[test]
fn test_error_out_of_bounds_ignores_spare_capacity() {
    let mut array = DynArray::with_capacity(10).unwrap();
    array.push(1).unwrap();

    assert!(array.get(5).is_err());
    assert!(array.remove_at(1).is_err());
    assert_eq!(array, [1]);
}

#[test]
fn test_error_empty_array_pop() {
    let mut array = DynArray::<String>::new();

    assert_eq!(array.try_pop().unwrap_err(), DynArrayError::EmptyArray);
}

#[test]
fn test_error_allocation_failed_on_construction() {
    let result = DynArray::<u64>::with_capacity(usize::MAX);
    assert_eq!(
        result.unwrap_err(),
        DynArrayError::AllocationFailed {
            requested: usize::MAX
        }
    );
}

#[test]
fn test_error_allocation_failure_leaves_array_unchanged() {
    let mut array = DynArray::from([1u64, 2, 3]);
    let capacity = array.capacity();

    let result = array.reserve(usize::MAX / 2);
    assert!(matches!(
        result,
        Err(DynArrayError::AllocationFailed { .. })
    ));

    assert_eq!(array, [1, 2, 3]);
    assert_eq!(array.capacity(), capacity);

    array.push(4).unwrap();
    assert_eq!(array, [1, 2, 3, 4]);
}

#[test]
fn test_error_reserve_overflowing_len() {
    let mut array = DynArray::from([1u8]);

    assert!(array.reserve(usize::MAX).is_err());
    assert_eq!(array, [1]);
}

#[test]
fn test_error_pair_seq_forwards_errors() {
    let mut seq = PairSeq::<u8, u8>::new();

    assert_eq!(
        seq.get(0).unwrap_err(),
        DynArrayError::IndexOutOfBounds {
            index: 0,
            length: 0
        }
    );
    assert!(seq.remove_at(0).is_err());
}

#[test]
fn test_error_display_messages() {
    assert_eq!(
        DynArrayError::IndexOutOfBounds {
            index: 5,
            length: 2
        }
        .to_string(),
        "Index out of bounds: index 5 is beyond array length 2"
    );
    assert_eq!(
        DynArrayError::AllocationFailed { requested: 64 }.to_string(),
        "Allocation failed: could not reserve storage for 64 elements"
    );
    assert_eq!(
        DynArrayError::EmptyArray.to_string(),
        "Operation on empty array"
    );
    assert_eq!(
        DynArrayError::InvalidConfiguration {
            parameter: "growth_factor",
            value: 1
        }
        .to_string(),
        "Invalid configuration: growth_factor cannot be 1"
    );
}

#[test]
#[should_panic(expected = "Index 1 out of bounds for array of length 1")]
fn test_index_out_of_bounds_panics() {
    let array = DynArray::from(["test"]);
    let _value = array[1];
}

#[test]
#[should_panic(expected = "Index 0 out of bounds for array of length 0")]
fn test_index_mut_out_of_bounds_panics() {
    let mut array = DynArray::<i32>::with_default_capacity().unwrap();
    array[0] = 1;
}
