use int_vector::IntVector;

fn main() {
    println!("--- Basic Usage Example ---");
    let mut v = IntVector::with_capacity(2);

    for i in 1..=5 {
        v.push_back(i * 10);
        println!(
            "Pushed: {}, len: {}, cap: {}",
            i * 10,
            v.len(),
            v.capacity()
        );
    }

    v.push_front(5);
    v.insert_at(3, 25);
    println!("Elements: {:?}", v.as_slice());

    println!("Index of 25: {}", v.linear_search(25));
    println!("Index of 99: {} (len {})", v.linear_search(99), v.len());

    v.set_at(0, 60);
    v.quick_sort();
    println!("Sorted: {:?}", v.as_slice());
    println!("Binary search for 40: {}", v.binary_search(40));

    while !v.is_empty() {
        let val = v.pop_back();
        println!("Popped: {}, len: {}", val, v.len());
    }
}
