mod topic;
mod user;
