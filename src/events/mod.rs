pub mod todo_created;
