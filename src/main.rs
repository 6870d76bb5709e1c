use container_lib::collections::adapters::{Queue, Stack};
use container_lib::collections::contiguous::DynamicArray;
use container_lib::collections::linked::{DoublyLinkedList, SinglyLinkedList};

#[derive(Debug)]
struct Noisy(u32);

impl Drop for Noisy {
    fn drop(&mut self) {
        println!("Dropped Noisy({})", self.0);
    }
}

fn print_int(value: &i32) {
    print!("{value}");
}

fn main() {
    println!("\n[DynamicArray]\n");

    let mut arr = DynamicArray::with_cap(10);
    for value in [5, 10, 15] {
        arr.push(value);
    }
    arr.print_with(print_int);
    println!("len: {}, cap: {}", arr.len(), arr.cap());
    println!("index_of(10): {:?}", arr.index_of(&10));

    let removed = arr.remove(1);
    println!("removed: {removed}");
    arr.print_with(print_int);

    for value in 0..12 {
        arr.push(value);
    }
    println!("{arr:?}");
    arr.reverse();
    println!("{arr}");

    println!("\n[SinglyLinkedList]\n");

    let mut list = SinglyLinkedList::new();
    list.push_back(1);
    list.push_back(3);
    list.insert(1, 2);
    list.print_with(print_int);
    list.set(1, 42);
    list.print_with(print_int);
    list.reverse();
    list.print_with(print_int);
    println!("{list}");

    println!("\n[DoublyLinkedList]\n");

    let mut list: DoublyLinkedList<_> = (1..=5).collect();
    list.remove(3);
    list.push_front(0);
    println!("{list}");
    println!("{list:?}");

    println!("\n[Stack]\n");

    let mut stack = Stack::new();
    for value in [10, 20, 30] {
        stack.push(value);
    }
    println!("peek: {:?}", stack.peek());
    while let Some(value) = stack.pop() {
        println!("pop: {value}");
    }
    println!("pop on empty: {:?}", stack.pop());

    println!("\n[Queue]\n");

    let mut queue = Queue::new();
    queue.enqueue(10);
    queue.enqueue(20);
    println!("front: {:?}", queue.front());
    while let Some(value) = queue.dequeue() {
        println!("dequeue: {value}");
    }
    println!("dequeue on empty: {:?}", queue.dequeue());

    println!("\n[Ownership]\n");

    let mut arr: DynamicArray<_> = (0..3).map(Noisy).collect();
    arr.set(0, Noisy(10));
    let taken = arr.replace(1, Noisy(11));
    println!("took {taken:?} without dropping it");
    arr.destroy_with(|value| println!("destroying {value:?}"));
}
